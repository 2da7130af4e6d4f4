//! RP2040 hardware timer as a warning-lights time source.
//!
//! The timer counts microseconds in 64 bits; the sequencer only needs a
//! wrapping millisecond counter, so the count is truncated to [`Millis`].

use rp_pico::hal::Timer;
use warning_lights::{Millis, TimeSource};

/// Time source wrapper around the RP2040 Timer
pub struct PicoClock {
    timer: Timer,
}

impl PicoClock {
    pub fn new(timer: Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Millis> for PicoClock {
    fn now(&self) -> Millis {
        let micros = self.timer.get_counter().ticks();
        Millis((micros / 1_000) as u32)
    }
}
