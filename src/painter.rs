//! Webcam-paint loop around the region finder.
//!
//! Per frame, the painter feeds the frame and the chosen target color into
//! the finder and stamps the largest region's points into a persistent
//! accumulation canvas with a fixed brush color. Painting is additive only;
//! the canvas loses pixels solely through an explicit
//! [`clear_painting`](Painter::clear_painting).
use crate::finder::{FinderParams, RegionFinder};
use crate::image::{RgbFrame, RgbaCanvas};
use crate::types::Rgb;
use log::debug;

/// What the frontend should draw this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// The live frame, untouched.
    #[default]
    Webcam,
    /// The recolored segmentation of the live frame.
    Recolored,
    /// The accumulated painting.
    Painting,
}

impl DisplayMode {
    /// Maps the classic key bindings; other keys return `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Webcam),
            'r' => Some(Self::Recolored),
            'p' => Some(Self::Painting),
            _ => None,
        }
    }
}

/// Default brush color (blue).
pub const DEFAULT_BRUSH: Rgb = Rgb::new(0, 0, 255);

/// Drives a [`RegionFinder`] over live frames and accumulates paint.
pub struct Painter {
    finder: RegionFinder,
    painting: RgbaCanvas,
    brush: Rgb,
    target: Option<Rgb>,
    mode: DisplayMode,
}

impl Painter {
    /// Canvas dimensions must match the incoming frames.
    pub fn new(width: usize, height: usize, params: FinderParams) -> Self {
        Self {
            finder: RegionFinder::new(params),
            painting: RgbaCanvas::new(width, height),
            brush: DEFAULT_BRUSH,
            target: None,
            mode: DisplayMode::default(),
        }
    }

    pub fn with_brush(mut self, brush: Rgb) -> Self {
        self.brush = brush;
        self
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn target(&self) -> Option<Rgb> {
        self.target
    }

    /// Choose the target color by sampling a clicked pixel. Out-of-bounds
    /// clicks are ignored.
    pub fn pick_target(&mut self, frame: &RgbFrame, x: usize, y: usize) {
        if frame.contains(x, y) {
            self.target = Some(frame.get(x, y));
        }
    }

    /// Process one frame: segment against the current target and stamp the
    /// largest region into the painting with the brush color.
    ///
    /// A no-op until a target has been picked; the processing loop must keep
    /// running rather than surface a missing-target condition.
    pub fn process_frame(&mut self, frame: &RgbFrame) {
        let Some(target) = self.target else {
            return;
        };
        self.finder.set_image(frame.clone());
        if let Err(err) = self.finder.find_regions(target) {
            debug!("Painter::process_frame segmentation skipped: {err}");
            return;
        }
        for p in &self.finder.largest_region() {
            self.painting.paint(*p, self.brush);
        }
    }

    /// Segment the frame and return the recolored raster, the 'r'-mode view.
    /// `None` until a target has been picked.
    pub fn recolored_view(&mut self, frame: &RgbFrame) -> Option<&RgbFrame> {
        let target = self.target?;
        self.finder.set_image(frame.clone());
        if let Err(err) = self
            .finder
            .find_regions(target)
            .and_then(|_| self.finder.recolor_image())
        {
            debug!("Painter::recolored_view segmentation skipped: {err}");
            return None;
        }
        self.finder.recolored_image()
    }

    pub fn painting(&self) -> &RgbaCanvas {
        &self.painting
    }

    pub fn finder(&self) -> &RegionFinder {
        &self.finder
    }

    /// Reset the painting to a blank canvas.
    pub fn clear_painting(&mut self) {
        self.painting.clear();
    }
}
