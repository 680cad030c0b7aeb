//! Region finder holding the working image and the latest segmentation.
//!
//! Typical usage:
//! ```
//! use region_painter::{FinderParams, RegionFinder, Rgb, RgbFrame};
//!
//! let mut finder = RegionFinder::new(FinderParams::default());
//! finder.set_image(RgbFrame::new(64, 48));
//! finder.find_regions(Rgb::new(0, 0, 0)).unwrap();
//! let largest = finder.largest_region();
//! println!("largest region: {} px", largest.len());
//! ```
use super::flood::{scan_regions, ScanOutcome};
use super::params::FinderParams;
use crate::diagnostics::SegmentationReport;
use crate::error::FinderError;
use crate::image::RgbFrame;
use crate::types::{Region, Rgb};
use log::debug;
use rand::Rng;
use std::time::Instant;

/// Finds and holds regions of target-colored pixels in a working image.
///
/// One instance owns its working image, the region set of the latest pass
/// and the latest recolored raster. The model is single-threaded
/// call-and-return; concurrent callers must use one instance per pipeline or
/// serialize access externally.
pub struct RegionFinder {
    params: FinderParams,
    image: Option<RgbFrame>,
    regions: Option<Vec<Region>>,
    recolored: Option<RgbFrame>,
    last_discarded: usize,
    last_matched: usize,
}

impl RegionFinder {
    /// Create a finder with the supplied thresholds and no working image.
    pub fn new(params: FinderParams) -> Self {
        Self {
            params,
            image: None,
            regions: None,
            recolored: None,
            last_discarded: 0,
            last_matched: 0,
        }
    }

    pub fn params(&self) -> &FinderParams {
        &self.params
    }

    /// Replace the working image. The region set of a prior image is kept
    /// as-is until the next [`find_regions`](Self::find_regions) call;
    /// callers must re-run segmentation themselves.
    pub fn set_image(&mut self, image: RgbFrame) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&RgbFrame> {
        self.image.as_ref()
    }

    /// The raster produced by the last [`recolor_image`](Self::recolor_image)
    /// call, if any. Not refreshed automatically.
    pub fn recolored_image(&self) -> Option<&RgbFrame> {
        self.recolored.as_ref()
    }

    /// Regions of the latest pass, empty before the first one.
    pub fn regions(&self) -> &[Region] {
        self.regions.as_deref().unwrap_or(&[])
    }

    /// Run one segmentation pass against `target`, replacing any prior
    /// region set.
    ///
    /// Deterministic: the same image, target and thresholds always yield the
    /// same region set in the same order. A frame with no matching pixels
    /// yields an empty set, which is not an error.
    pub fn find_regions(&mut self, target: Rgb) -> Result<(), FinderError> {
        self.run_scan(target)
    }

    /// Same pass as [`find_regions`](Self::find_regions), returning timing
    /// and component statistics.
    pub fn find_regions_with_report(
        &mut self,
        target: Rgb,
    ) -> Result<SegmentationReport, FinderError> {
        let t0 = Instant::now();
        self.run_scan(target)?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let image = self.image.as_ref().ok_or(FinderError::MissingImage)?;
        let region_sizes: Vec<usize> = self.regions().iter().map(Region::len).collect();
        let report = SegmentationReport {
            width: image.width(),
            height: image.height(),
            target,
            max_color_diff: self.params.max_color_diff,
            min_region: self.params.min_region,
            largest_region: region_sizes.iter().copied().max().unwrap_or(0),
            discarded_components: self.last_discarded,
            matched_pixels: self.last_matched,
            region_sizes,
            elapsed_ms,
        };
        Ok(report)
    }

    /// The region with the most points, or the empty region when the set is
    /// empty or segmentation has not run. Ties go to the region discovered
    /// first.
    pub fn largest_region(&self) -> Region {
        let mut best: Option<&Region> = None;
        for region in self.regions() {
            // Strictly greater, so the first-discovered region wins ties.
            if best.map_or(true, |b| region.len() > b.len()) {
                best = Some(region);
            }
        }
        best.cloned().unwrap_or_default()
    }

    /// Rebuild the recolored raster: a copy of the working image with each
    /// region overwritten by one color sampled uniformly from the 24-bit RGB
    /// space. Unseeded; use [`recolor_image_with_rng`](Self::recolor_image_with_rng)
    /// for reproducible output.
    pub fn recolor_image(&mut self) -> Result<(), FinderError> {
        self.recolor_image_with_rng(&mut rand::rng())
    }

    /// [`recolor_image`](Self::recolor_image) with an injected random
    /// source.
    pub fn recolor_image_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<(), FinderError> {
        let image = self.image.as_ref().ok_or(FinderError::MissingImage)?;
        let regions = self.regions.as_deref().ok_or(FinderError::MissingRegions)?;

        let mut recolored = image.clone();
        for region in regions {
            let color = Rgb::from_u24(rng.random_range(0..1u32 << 24));
            for p in region {
                recolored.set(p.x, p.y, color);
            }
        }
        self.recolored = Some(recolored);
        Ok(())
    }

    fn run_scan(&mut self, target: Rgb) -> Result<(), FinderError> {
        let image = self.image.as_ref().ok_or(FinderError::MissingImage)?;
        let ScanOutcome {
            regions,
            discarded,
            matched_pixels,
        } = scan_regions(image, target, &self.params);
        debug!(
            "RegionFinder::find_regions target={target:?} kept={} discarded={discarded} matched={matched_pixels}",
            regions.len()
        );
        self.last_discarded = discarded;
        self.last_matched = matched_pixels;
        self.regions = Some(regions);
        Ok(())
    }
}
