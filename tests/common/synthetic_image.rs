use region_painter::{Rgb, RgbFrame};

/// Generates a frame filled with one color.
pub fn solid_frame(width: usize, height: usize, color: Rgb) -> RgbFrame {
    let mut frame = RgbFrame::new(width, height);
    if width > 0 && height > 0 {
        frame.fill_rect(0, 0, width - 1, height - 1, color);
    }
    frame
}

/// Generates a background-colored frame with rectangular blocks stamped on
/// top. Rectangles are inclusive corner pairs `(x0, y0, x1, y1)`.
pub fn frame_with_blocks(
    width: usize,
    height: usize,
    background: Rgb,
    blocks: &[(usize, usize, usize, usize, Rgb)],
) -> RgbFrame {
    let mut frame = solid_frame(width, height, background);
    for &(x0, y0, x1, y1, color) in blocks {
        frame.fill_rect(x0, y0, x1, y1, color);
    }
    frame
}

pub const BACKGROUND: Rgb = Rgb::new(230, 230, 230);
pub const TARGET: Rgb = Rgb::new(100, 100, 100);
