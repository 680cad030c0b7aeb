use crate::types::Rgb;
use serde::Serialize;

/// Summary of one segmentation pass, serializable for the demo's JSON
/// output.
#[derive(Clone, Debug, Serialize)]
pub struct SegmentationReport {
    pub width: usize,
    pub height: usize,
    pub target: Rgb,
    pub max_color_diff: u8,
    pub min_region: usize,
    /// Point counts of the retained regions, in discovery order.
    pub region_sizes: Vec<usize>,
    /// Components found but below `min_region`.
    pub discarded_components: usize,
    /// Total target-matching pixels, retained or not.
    pub matched_pixels: usize,
    /// Size of the largest retained region (0 when none).
    pub largest_region: usize,
    pub elapsed_ms: f64,
}

impl SegmentationReport {
    pub fn regions_found(&self) -> usize {
        self.region_sizes.len()
    }
}
