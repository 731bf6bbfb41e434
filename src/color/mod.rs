mod ops;
mod palette;

use smart_leds::RGB8;

pub use ops::{apply_brightness, interpolate, jitter, rgb_from_u32};
pub use palette::{DEFAULT_PALETTE, MAX_PALETTE_COLORS, Palette, PaletteError};

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
