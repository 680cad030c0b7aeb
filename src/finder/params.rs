//! Parameters controlling the region-growing segmentation.
use serde::{Deserialize, Serialize};

/// Default per-channel similarity threshold.
pub const DEFAULT_MAX_COLOR_DIFF: u8 = 20;
/// Default minimum component size worth keeping.
pub const DEFAULT_MIN_REGION: usize = 50;

/// Thresholds for one segmentation pass.
///
/// Both knobs are deliberately loose by default: a webcam frame is noisy, so
/// a tight color threshold fragments regions, and tiny components are almost
/// always speckle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderParams {
    /// Per-channel absolute difference a pixel may have from the target
    /// color and still belong to a region (Chebyshev-style bound, applied to
    /// red, green and blue independently).
    pub max_color_diff: u8,
    /// Minimum point count for a connected component to be retained.
    /// Smaller components are discovered, marked visited and discarded.
    pub min_region: usize,
}

impl Default for FinderParams {
    fn default() -> Self {
        Self {
            max_color_diff: DEFAULT_MAX_COLOR_DIFF,
            min_region: DEFAULT_MIN_REGION,
        }
    }
}
