//! Warning-light animation routines.
//!
//! Every routine is blocking: it paints the strip, shows it and waits through
//! the injected [`DelayNs`] until its fixed sequence is complete. None of them
//! look at the button; a press is handled once the routine returns.
//!
//! Ranges and widths are clamped to the strip, so a routine never writes a
//! pixel the sink does not have.

use crate::colors::{AMBER, BLACK, BLUE, Color, GREEN, RED, WHITE, hsl};
use crate::config::{Config, FlashSpeed};
use crate::strip::PixelSink;
use crate::types::Pattern;
use core::ops::Range;
use embedded_hal::delay::DelayNs;
use heapless::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound on pixels lit per lightning cycle.
pub const MAX_SIMULTANEOUS: usize = 32;

/// Wait between self-test steps, long enough to compare against the expected order.
pub const SELF_TEST_WAIT_MS: u32 = 5000;

/// Flash delays resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashSpeeds {
    pub slow: u32,
    pub medium: u32,
    pub quick: u32,
}

impl FlashSpeeds {
    pub const fn from_config(config: &Config) -> Self {
        Self {
            slow: config.flash_delay(FlashSpeed::Slow),
            medium: config.flash_delay(FlashSpeed::Medium),
            quick: config.flash_delay(FlashSpeed::Quick),
        }
    }
}

/// One frame of the center-out arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CenterFrame {
    /// Pixel left of center, `None` when the strip is too short to have one.
    pub left: Option<usize>,
    /// Pixel at or right of center.
    pub right: usize,
    /// Distance of `left` from the center pixel.
    pub offset: usize,
}

/// Frames of the center-out arrow.
///
/// The right pixel walks from `halfway = len / 2 - 1` to the end of the strip.
/// The left pixel sits `offset` below `halfway`, where the offset counts up
/// from 1 and drops back to 1 as soon as it reaches `halfway`.
#[derive(Debug, Clone)]
pub struct CenterOut {
    len: usize,
    halfway: usize,
    right: usize,
    offset: usize,
}

impl CenterOut {
    pub fn new(len: usize) -> Self {
        let halfway = (len / 2).saturating_sub(1);
        Self {
            len,
            halfway,
            right: halfway,
            offset: 1,
        }
    }

    pub fn halfway(&self) -> usize {
        self.halfway
    }
}

impl Iterator for CenterOut {
    type Item = CenterFrame;

    fn next(&mut self) -> Option<CenterFrame> {
        if self.right >= self.len {
            return None;
        }

        let frame = CenterFrame {
            left: self.halfway.checked_sub(self.offset),
            right: self.right,
            offset: self.offset,
        };

        self.right += 1;
        self.offset += 1;
        if self.offset >= self.halfway {
            self.offset = 1;
        }

        Some(frame)
    }
}

/// The set of animations, bound to one strip and one delay provider.
///
/// # Type Parameters
/// * `S` - Pixel sink the routines paint into
/// * `D` - Blocking delay used between frames
pub struct PatternLibrary<S: PixelSink, D: DelayNs> {
    sink: S,
    delay: D,
    speeds: FlashSpeeds,
    rng: SmallRng,
}

impl<S: PixelSink, D: DelayNs> PatternLibrary<S, D> {
    /// Creates a library using the speeds and random seed from `config`.
    pub fn new(sink: S, delay: D, config: &Config) -> Self {
        Self {
            sink,
            delay,
            speeds: FlashSpeeds::from_config(config),
            rng: SmallRng::seed_from_u64(config.random_seed),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn speeds(&self) -> FlashSpeeds {
        self.speeds
    }

    /// Returns the sink and delay, consuming the library.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    /// Plays one full pass of `pattern`.
    pub fn run(&mut self, pattern: Pattern) {
        let FlashSpeeds { slow, medium, quick } = self.speeds;

        match pattern {
            Pattern::Off => self.blank(),
            Pattern::PoliceLightning => {
                for color in [BLUE, WHITE, BLUE, RED, WHITE, RED] {
                    self.lightning_flash(color, 10, 10, quick);
                }
            }
            Pattern::PoliceWigWagWhite => self.alternating_two_color_white(BLUE, RED, 4, quick, true),
            Pattern::AmberCenterArrow => self.arrow_center(AMBER, slow),
            Pattern::SplitStrobe => self.split_strobe(BLUE, RED, 4),
            Pattern::PoliceWigWag => self.alternating_two_color(BLUE, RED, 4, medium),
            Pattern::FireWigWagWhite => self.alternating_two_color_white(RED, RED, 4, quick, false),
            Pattern::EmsWigWag => self.alternating_two_color(RED, WHITE, 4, medium),
            Pattern::AmberCylon => self.cylon(AMBER, 4, medium),
            Pattern::AmberArrowLeft => self.arrow_left(AMBER, medium),
            Pattern::AmberArrowRight => self.arrow_right(AMBER, medium),
            Pattern::AmberWigWag => self.alternating_single_color(AMBER, slow),
            Pattern::Floodlight => self.steady_on(WHITE),
        }
    }

    /// Turns every pixel off and shows it.
    pub fn blank(&mut self) {
        self.sink.clear_to(BLACK);
        self.sink.show();
    }

    /// Blocks for `ms` milliseconds.
    pub fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Flashes `range` in `color` `count` times.
    ///
    /// Each flash paints the range, shows, waits, paints the range black, shows
    /// and waits again. Pixels outside the range are not touched.
    pub fn flash(&mut self, color: Color, count: u32, range: Range<usize>, delay_ms: u32) {
        let range = self.clamp(range);

        for _ in 0..count {
            self.fill(range.clone(), color);
            self.sink.show();
            self.delay.delay_ms(delay_ms);

            self.fill(range.clone(), BLACK);
            self.sink.show();
            self.delay.delay_ms(delay_ms);
        }
    }

    /// Flashes the left half in `color1`, then the right half in `color2`.
    pub fn alternating_two_color(&mut self, color1: Color, color2: Color, count: u32, delay_ms: u32) {
        let (left, right) = self.halves();

        self.flash(color1, count, left, delay_ms);
        self.flash(color2, count, right, delay_ms);
    }

    /// Two-color wig-wag with a white flash on the opposite half between swaps.
    ///
    /// With `switch_colors` the sequence continues with the colors mirrored, so
    /// each half shows both colors before the routine returns.
    pub fn alternating_two_color_white(
        &mut self,
        color1: Color,
        color2: Color,
        count: u32,
        delay_ms: u32,
        switch_colors: bool,
    ) {
        let (left, right) = self.halves();

        self.flash(color1, count, left.clone(), delay_ms);
        self.flash(WHITE, count, right.clone(), delay_ms);
        self.flash(WHITE, count, left.clone(), delay_ms);
        self.flash(color2, count, right.clone(), delay_ms);

        if switch_colors {
            self.flash(color2, count, left.clone(), delay_ms);
            self.flash(WHITE, count, right.clone(), delay_ms);
            self.flash(WHITE, count, left, delay_ms);
            self.flash(color1, count, right, delay_ms);
        }
    }

    /// Single-color wig-wag: left half lit, then right half lit.
    pub fn alternating_single_color(&mut self, color: Color, delay_ms: u32) {
        let (left, right) = self.halves();

        self.fill(left.clone(), color);
        self.fill(right.clone(), BLACK);
        self.sink.show();
        self.delay.delay_ms(delay_ms);

        self.fill(left, BLACK);
        self.fill(right, color);
        self.sink.show();
        self.delay.delay_ms(delay_ms);
    }

    /// Paints the whole strip and shows it once.
    pub fn steady_on(&mut self, color: Color) {
        let len = self.sink.len();
        self.fill(0..len, color);
        self.sink.show();
    }

    /// Strobes the left half between two colors, then blinks the right half.
    ///
    /// Runs at the medium flash speed.
    pub fn split_strobe(&mut self, color1: Color, color2: Color, count: u32) {
        let delay_ms = self.speeds.medium;
        let (left, right) = self.halves();

        for _ in 0..count {
            self.fill(left.clone(), color1);
            self.sink.show();
            self.delay.delay_ms(delay_ms);

            self.fill(left.clone(), color2);
            self.sink.show();
            self.delay.delay_ms(delay_ms);
        }

        self.sink.clear_to(BLACK);
        self.sink.show();
        self.delay.delay_ms(delay_ms);

        for _ in 0..count {
            self.sink.clear_to(BLACK);
            self.sink.show();
            self.delay.delay_ms(delay_ms);

            self.fill(right.clone(), color2);
            self.sink.show();
            self.delay.delay_ms(delay_ms);
        }

        self.sink.clear_to(BLACK);
        self.sink.show();
        self.delay.delay_ms(delay_ms);
    }

    /// Lights `simultaneous` random pixels per cycle, then turns them off again.
    ///
    /// Picks may repeat within a cycle. Each cycle issues exactly one show with
    /// the strikes lit and one with them cleared. `simultaneous` is capped at
    /// [`MAX_SIMULTANEOUS`].
    pub fn lightning_flash(&mut self, color: Color, simultaneous: usize, cycles: u32, delay_ms: u32) {
        let len = self.sink.len();
        if len == 0 {
            return;
        }

        let mut strikes: Vec<usize, MAX_SIMULTANEOUS> = Vec::new();

        for _ in 0..cycles {
            strikes.clear();
            for _ in 0..simultaneous.min(MAX_SIMULTANEOUS) {
                let index = self.rng.gen_range(0..len);
                // capacity is MAX_SIMULTANEOUS and the loop is capped to it
                let _ = strikes.push(index);
                self.sink.set_pixel(index, color);
            }
            self.sink.show();
            self.delay.delay_ms(delay_ms);

            for &index in strikes.iter() {
                self.sink.set_pixel(index, BLACK);
            }
            self.sink.show();
            self.delay.delay_ms(delay_ms);
        }
    }

    /// Sweeps a `width`-pixel window to the far end of the strip and back.
    ///
    /// The window is cleared after each frame is shown, so only one window is
    /// ever visible. `width` is clamped to the strip length.
    pub fn cylon(&mut self, color: Color, width: usize, delay_ms: u32) {
        let len = self.sink.len();
        let width = width.min(len);
        if width == 0 {
            return;
        }
        let last_start = len - width;

        for start in 0..=last_start {
            self.sweep_frame(start..start + width, color, delay_ms);
        }
        for start in (0..=last_start).rev() {
            self.sweep_frame(start..start + width, color, delay_ms);
        }
    }

    /// Runs a single pixel from the first LED to the last.
    pub fn arrow_right(&mut self, color: Color, delay_ms: u32) {
        for index in 0..self.sink.len() {
            self.scan_frame(index, color, delay_ms);
        }
    }

    /// Runs a single pixel from the last LED to the first.
    pub fn arrow_left(&mut self, color: Color, delay_ms: u32) {
        for index in (0..self.sink.len()).rev() {
            self.scan_frame(index, color, delay_ms);
        }
    }

    /// Grows an arrow outward from the center, then erases it in the same order.
    pub fn arrow_center(&mut self, color: Color, delay_ms: u32) {
        for paint in [color, BLACK] {
            for frame in CenterOut::new(self.sink.len()) {
                if let Some(left) = frame.left {
                    self.sink.set_pixel(left, paint);
                }
                self.sink.set_pixel(frame.right, paint);
                self.sink.show();
                self.delay.delay_ms(delay_ms);
            }
        }
    }

    /// Channel-order check for a freshly wired strip.
    ///
    /// Shows red, green, blue and white on the first four pixels, first from RGB
    /// constants and then from HSL conversions, with a long pause after each
    /// step. If the order on the strip differs, the driver's color order is wrong.
    pub fn self_test(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Self-test: expect red, green, blue, white on pixels 0-3");

        self.delay.delay_ms(SELF_TEST_WAIT_MS);

        self.paint_first(&[RED, GREEN, BLUE, WHITE]);
        self.sink.show();
        self.delay.delay_ms(SELF_TEST_WAIT_MS);

        self.paint_first(&[BLACK; 4]);
        self.sink.show();
        self.delay.delay_ms(SELF_TEST_WAIT_MS);

        #[cfg(feature = "defmt")]
        defmt::info!("Self-test: same colors from HSL");

        self.paint_first(&[
            hsl(0.0, 1.0, 0.5),
            hsl(120.0, 1.0, 0.5),
            hsl(240.0, 1.0, 0.5),
            hsl(0.0, 0.0, 1.0),
        ]);
        self.sink.show();
        self.delay.delay_ms(SELF_TEST_WAIT_MS);

        self.paint_first(&[BLACK; 4]);
        self.sink.show();
        self.delay.delay_ms(SELF_TEST_WAIT_MS);

        #[cfg(feature = "defmt")]
        defmt::info!("Self-test complete");
    }

    fn sweep_frame(&mut self, window: Range<usize>, color: Color, delay_ms: u32) {
        self.fill(window.clone(), color);
        self.sink.show();
        self.fill(window, BLACK);
        self.delay.delay_ms(delay_ms);
    }

    fn scan_frame(&mut self, index: usize, color: Color, delay_ms: u32) {
        self.sink.set_pixel(index, color);
        self.sink.show();
        self.delay.delay_ms(delay_ms);
        self.sink.clear_to(BLACK);
    }

    fn paint_first(&mut self, colors: &[Color]) {
        let len = self.sink.len();
        for (index, &color) in colors.iter().enumerate().take(len) {
            self.sink.set_pixel(index, color);
        }
    }

    fn fill(&mut self, range: Range<usize>, color: Color) {
        for index in self.clamp(range) {
            self.sink.set_pixel(index, color);
        }
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.sink.len();
        let end = range.end.min(len);
        range.start.min(end)..end
    }

    fn halves(&self) -> (Range<usize>, Range<usize>) {
        let len = self.sink.len();
        let middle = len / 2;
        (0..middle, middle..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_out_covers_right_half_from_halfway() {
        let rights: heapless::Vec<usize, 16> = CenterOut::new(20).map(|f| f.right).collect();
        assert_eq!(rights.as_slice(), &[9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
    }

    #[test]
    fn center_out_offset_resets_at_halfway() {
        let center = CenterOut::new(20);
        let halfway = center.halfway();
        assert_eq!(halfway, 9);

        let offsets: heapless::Vec<usize, 16> = center.map(|f| f.offset).collect();
        assert_eq!(offsets.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3]);
        assert!(offsets.iter().all(|&o| o >= 1 && o < halfway));
    }

    #[test]
    fn center_out_on_tiny_strips_stays_in_range() {
        for len in [2usize, 4, 6] {
            for frame in CenterOut::new(len) {
                assert!(frame.right < len);
                if let Some(left) = frame.left {
                    assert!(left < len);
                }
            }
        }

        // Two LEDs: halfway is 0, there is no pixel left of it
        let frames: heapless::Vec<CenterFrame, 4> = CenterOut::new(2).collect();
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|f| f.left.is_none()));
    }

    #[test]
    fn speeds_follow_config() {
        let speeds = FlashSpeeds::from_config(&Config::DEFAULT);
        assert_eq!(speeds, FlashSpeeds { slow: 250, medium: 50, quick: 10 });
    }
}
