//! Shared test infrastructure for warning-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use embedded_hal::delay::DelayNs;
use warning_lights::{
    BLACK, ButtonFlag, Color, Config, PatternLibrary, PatternSequencer, PixelSink, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Clock that is both the time source and the delay.
///
/// Delays are recorded and move time forward instead of sleeping, so a pattern
/// that "waits" 10ms advances `now()` by exactly 10ms.
pub struct MockClock {
    current_time: Cell<u64>,
    delays: RefCell<Vec<u32>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
            delays: RefCell::new(Vec::new()),
        }
    }

    /// Advance time without recording a delay (time passing outside the library)
    pub fn advance(&self, millis: u64) {
        self.current_time.set(self.current_time.get() + millis);
    }

    /// Every delay requested so far, in milliseconds
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    pub fn total_delay(&self) -> u64 {
        self.delays.borrow().iter().map(|&d| d as u64).sum()
    }

    pub fn clear_delays(&self) {
        self.delays.borrow_mut().clear();
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.get())
    }
}

impl DelayNs for &MockClock {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.borrow_mut().push(ms);
        self.advance(ms as u64);
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// One call made on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOp {
    Set(usize, Color),
    Clear(Color),
    Show,
}

/// Strip that records every call and keeps a copy of each shown frame
pub struct MockStrip {
    pixels: Vec<Color>,
    ops: Vec<StripOp>,
    frames: Vec<Vec<Color>>,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![BLACK; len],
            ops: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn ops(&self) -> &[StripOp] {
        &self.ops
    }

    /// Buffer contents at each show
    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    pub fn show_count(&self) -> usize {
        self.frames.len()
    }

    /// Indices passed to set_pixel, in call order
    pub fn set_indices(&self) -> Vec<usize> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                StripOp::Set(index, _) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn clear_history(&mut self) {
        self.ops.clear();
        self.frames.clear();
    }
}

impl PixelSink for MockStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        assert!(
            index < self.pixels.len(),
            "pixel index {} out of range for {} LEDs",
            index,
            self.pixels.len()
        );
        self.pixels[index] = color;
        self.ops.push(StripOp::Set(index, color));
    }

    fn clear_to(&mut self, color: Color) {
        self.pixels.fill(color);
        self.ops.push(StripOp::Clear(color));
    }

    fn show(&mut self) {
        self.frames.push(self.pixels.clone());
        self.ops.push(StripOp::Show);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestLibrary<'c> = PatternLibrary<MockStrip, &'c MockClock>;
pub type TestSequencer<'a> =
    PatternSequencer<'a, TestInstant, MockStrip, &'a MockClock, MockClock>;

/// Library over a fresh strip of `len` LEDs with default speeds
pub fn library(clock: &MockClock, len: usize) -> TestLibrary<'_> {
    PatternLibrary::new(MockStrip::new(len), clock, &Config::DEFAULT)
}

/// Sequencer over the default 20-LED configuration
pub fn sequencer<'a>(clock: &'a MockClock, button: &'a ButtonFlag) -> TestSequencer<'a> {
    PatternSequencer::new(library(clock, 20), button, clock, &Config::DEFAULT).unwrap()
}

/// Let the debounce window pass, then press and handle the press
pub fn press(clock: &MockClock, button: &ButtonFlag, sequencer: &mut TestSequencer<'_>) {
    clock.advance(Config::DEFAULT.debounce_ms as u64 + 1);
    button.signal();
    sequencer.step();
}

/// Number of pixels that are not black
pub fn lit(frame: &[Color]) -> usize {
    frame.iter().filter(|&&c| c != BLACK).count()
}
