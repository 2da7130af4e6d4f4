//! Pixel sink abstraction and a buffered LED strip built on `smart-leds`.
//!
//! Pattern routines only talk to [`PixelSink`]. [`LedStrip`] is the production
//! implementation: it keeps the frame in RAM and streams it to any
//! [`SmartLedsWrite`] driver on [`PixelSink::show`].

use crate::colors::{BLACK, Color, to_rgb8};
use crate::error::{ConfigurationError, validate_strip_length};
use smart_leds::{RGB8, SmartLedsWrite, brightness};

/// Trait for abstracting an addressable LED strip.
///
/// Writes are buffered and only reach the LEDs on [`show`](PixelSink::show).
pub trait PixelSink {
    /// Number of LEDs on the strip. Fixed for the lifetime of the sink.
    fn len(&self) -> usize;

    /// Returns true if the strip has no LEDs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets one pixel in the buffer.
    ///
    /// An index at or past [`len`](PixelSink::len) is a caller bug. Implementations
    /// should `debug_assert!` on it and otherwise ignore the write.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Sets every pixel in the buffer.
    fn clear_to(&mut self, color: Color);

    /// Pushes the buffer to the LEDs.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn show(&mut self);
}

/// Fixed-length strip buffer driving a `smart-leds` writer.
///
/// # Type Parameters
/// * `W` - LED driver (WS2812 over PIO, SPI, RMT, ...)
/// * `N` - Number of LEDs, must be even and non-zero
pub struct LedStrip<W, const N: usize> {
    writer: W,
    pixels: [Color; N],
    brightness: u8,
    write_errors: u32,
}

impl<W, const N: usize> LedStrip<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// Creates a strip with every pixel black. Nothing is sent until `show`.
    pub fn new(writer: W, brightness: u8) -> Result<Self, ConfigurationError> {
        validate_strip_length(N)?;

        Ok(Self {
            writer,
            pixels: [BLACK; N],
            brightness,
            write_errors: 0,
        })
    }

    /// Returns the buffered frame.
    pub fn pixels(&self) -> &[Color; N] {
        &self.pixels
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Changes the global brightness used by subsequent `show` calls.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Number of `show` calls the driver rejected.
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Returns the driver, consuming the strip.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> PixelSink for LedStrip<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        debug_assert!(index < N, "pixel index {} out of range for {} LEDs", index, N);

        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear_to(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn show(&mut self) {
        let frame = brightness(self.pixels.iter().copied().map(to_rgb8), self.brightness);

        if self.writer.write(frame).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::warn!("LED driver rejected frame ({} failures)", self.write_errors);
        }
    }
}
