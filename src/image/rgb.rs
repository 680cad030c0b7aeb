use crate::types::Rgb;

/// Owned 8-bit RGB raster, 3 bytes per pixel, row-major.
///
/// Frames are dense (stride equals `3 * width`); a zero-sized frame is a
/// valid value and segmentation treats it as "no pixels to scan".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Construct an all-black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    /// Construct from interleaved RGB bytes; `data.len()` must equal
    /// `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height * 3 {
            return Err(format!(
                "raw buffer length {} does not match {}x{} RGB frame",
                data.len(),
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when `(x, y)` lies inside the frame.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        (y * self.width + x) * 3
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
    }

    /// Fill a rectangle with one color, clipped to the frame bounds.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, px: Rgb) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for y in y0..=y1.min(self.height - 1) {
            for x in x0..=x1.min(self.width - 1) {
                self.set(x, y, px);
            }
        }
    }

    /// Interleaved RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut frame = RgbFrame::new(4, 3);
        frame.set(3, 2, Rgb::new(10, 20, 30));
        assert_eq!(frame.get(3, 2), Rgb::new(10, 20, 30));
        assert_eq!(frame.get(0, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn from_raw_rejects_bad_length() {
        assert!(RgbFrame::from_raw(2, 2, vec![0u8; 11]).is_err());
        assert!(RgbFrame::from_raw(2, 2, vec![0u8; 12]).is_ok());
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut frame = RgbFrame::new(3, 3);
        frame.fill_rect(1, 1, 10, 10, Rgb::new(255, 0, 0));
        assert_eq!(frame.get(2, 2), Rgb::new(255, 0, 0));
        assert_eq!(frame.get(0, 0), Rgb::new(0, 0, 0));
    }
}
