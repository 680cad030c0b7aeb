//! Region-growing segmentation over a raster image.
//!
//! Overview
//! - Scans the working image in row-major order and grows an 8-connected
//!   component from every unvisited pixel whose color is within a
//!   per-channel threshold of the target color.
//! - Components below a minimum size are discarded; the survivors form the
//!   region set, queryable for the largest region and renderable as a
//!   recolored raster with one random color per region.
//!
//! Modules
//! - [`params`] – the two thresholds (`max_color_diff`, `min_region`).
//! - `flood` – the flood-fill scan and the color comparator.
//! - `mask` – the per-pass visited bitset.
//! - `pipeline` – the stateful [`RegionFinder`].

pub mod flood;
mod mask;
pub mod params;
mod pipeline;

pub use flood::color_match;
pub use params::{FinderParams, DEFAULT_MAX_COLOR_DIFF, DEFAULT_MIN_REGION};
pub use pipeline::RegionFinder;
