//! Named warning-light colors and color space helpers.
//!
//! Colors are `palette::Srgb<u8>` so they can be written straight into a pixel
//! buffer. The HSL/HSV helpers are mostly useful for checking a strip's channel
//! order during the self-test.

use palette::{FromColor, Hsl, Hsv, Srgb};
use smart_leds::RGB8;

/// A single pixel color, one byte per channel.
pub type Color = Srgb<u8>;

pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const AMBER: Color = Srgb::new(255, 215, 0);
pub const BLACK: Color = Srgb::new(0, 0, 0);

/// Creates a color from HSL (Hue, Saturation, Lightness) components.
///
/// Hue is in degrees, saturation and lightness in 0.0-1.0.
#[inline]
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let hsl: Hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = Srgb::from_color(hsl);
    rgb.into_format()
}

/// Creates a color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb = Srgb::from_color(hsv);
    rgb.into_format()
}

/// Converts to the pixel type LED drivers consume.
#[inline]
pub fn to_rgb8(color: Color) -> RGB8 {
    RGB8::new(color.red, color.green, color.blue)
}
