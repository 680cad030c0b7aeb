pub mod canvas;
pub mod io;
pub mod rgb;

pub use self::canvas::RgbaCanvas;
pub use self::rgb::RgbFrame;
