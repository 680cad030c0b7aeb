use crate::types::{Point, Rgb};

/// Persistent RGBA accumulation canvas.
///
/// Starts fully transparent; [`paint`](RgbaCanvas::paint) writes an opaque
/// pixel and nothing ever erases one except [`clear`](RgbaCanvas::clear),
/// which reallocates the canvas blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaCanvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write an opaque pixel; points outside the canvas are ignored.
    pub fn paint(&mut self, p: Point, px: Rgb) {
        if p.x >= self.width || p.y >= self.height {
            return;
        }
        let i = (p.y * self.width + p.x) * 4;
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
        self.data[i + 3] = 255;
    }

    /// Returns `Some(color)` for painted pixels, `None` for transparent ones.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        (self.data[i + 3] != 0).then(|| Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Number of painted (opaque) pixels.
    pub fn painted_count(&self) -> usize {
        self.data.iter().skip(3).step_by(4).filter(|&&a| a != 0).count()
    }

    /// Reallocate the canvas blank.
    pub fn clear(&mut self) {
        self.data = vec![0u8; self.width * self.height * 4];
    }

    /// Interleaved RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_additive_until_clear() {
        let mut canvas = RgbaCanvas::new(4, 4);
        assert_eq!(canvas.painted_count(), 0);
        canvas.paint(Point::new(1, 1), Rgb::new(0, 0, 255));
        canvas.paint(Point::new(2, 3), Rgb::new(0, 0, 255));
        assert_eq!(canvas.painted_count(), 2);
        assert_eq!(canvas.get(1, 1), Some(Rgb::new(0, 0, 255)));
        assert_eq!(canvas.get(0, 0), None);
        canvas.clear();
        assert_eq!(canvas.painted_count(), 0);
        assert_eq!(canvas.get(1, 1), None);
    }

    #[test]
    fn out_of_bounds_paint_is_ignored() {
        let mut canvas = RgbaCanvas::new(2, 2);
        canvas.paint(Point::new(5, 0), Rgb::new(1, 2, 3));
        canvas.paint(Point::new(0, 5), Rgb::new(1, 2, 3));
        assert_eq!(canvas.painted_count(), 0);
    }
}
