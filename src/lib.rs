#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod error;
pub mod finder;
pub mod image;
pub mod painter;
pub mod types;

// Demo configuration; only the binary needs this, but keeping it public
// makes the CLI surface testable.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::FinderError;
pub use crate::finder::{color_match, FinderParams, RegionFinder};
pub use crate::image::{RgbFrame, RgbaCanvas};
pub use crate::painter::{DisplayMode, Painter};
pub use crate::types::{Point, Region, Rgb};

/// Small prelude for quick experiments.
///
/// ```
/// use region_painter::prelude::*;
///
/// let mut frame = RgbFrame::new(32, 32);
/// frame.fill_rect(4, 4, 20, 20, Rgb::new(200, 40, 40));
///
/// let mut finder = RegionFinder::new(FinderParams {
///     min_region: 10,
///     ..Default::default()
/// });
/// finder.set_image(frame);
/// finder.find_regions(Rgb::new(200, 40, 40)).unwrap();
/// assert_eq!(finder.largest_region().len(), 17 * 17);
/// ```
pub mod prelude {
    pub use crate::finder::{FinderParams, RegionFinder};
    pub use crate::image::{RgbFrame, RgbaCanvas};
    pub use crate::painter::{DisplayMode, Painter};
    pub use crate::types::{Point, Region, Rgb};
}
