//! Icon palette.

use palette::{Srgb, Srgba, WithAlpha};

/// An 8-bit, straight-alpha sRGB color.
pub type Color = Srgba<u8>;

/// Hex form of the accent color, for display.
pub const ACCENT_HEX: &str = "#9333ea";

/// The purple accent used for the outer and inner discs (`#9333ea`).
pub fn accent() -> Color {
    Srgb::new(0x93, 0x33, 0xea).with_alpha(u8::MAX)
}

/// Opaque white, used for the contrast ring and the bag glyph.
pub fn white() -> Color {
    Srgb::new(u8::MAX, u8::MAX, u8::MAX).with_alpha(u8::MAX)
}

/// Converts a color into the `[r, g, b, a]` layout used by `image::Rgba`.
pub fn to_rgba(color: Color) -> [u8; 4] {
    [color.red, color.green, color.blue, color.alpha]
}
