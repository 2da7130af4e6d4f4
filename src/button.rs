//! Button input: an interrupt-safe press flag and the main-loop debouncer.
//!
//! The interrupt handler only ever calls [`ButtonFlag::signal`]. Everything that
//! needs a clock or touches the strip happens later, from the main loop.

use crate::time::{TimeDuration, TimeInstant};
use core::sync::atomic::{AtomicBool, Ordering};

/// Single-producer, single-consumer "a press happened" flag.
///
/// Meant to live in a `static` shared between the GPIO interrupt and the main
/// loop. Only atomic loads and stores are used, so it works on cores without
/// compare-and-swap (Cortex-M0, RISC-V without the A extension).
#[derive(Debug)]
pub struct ButtonFlag {
    pending: AtomicBool,
}

impl ButtonFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks a press as pending. Call this, and nothing else, from the interrupt.
    #[inline]
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns true if a press is waiting to be handled.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Acknowledges the pending press.
    #[inline]
    pub fn clear(&self) {
        self.pending.store(false, Ordering::Release);
    }
}

impl Default for ButtonFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-difference debouncer for button events.
///
/// An event is accepted when strictly more than the window has passed since
/// the previous event. The timestamp moves on every event, accepted or not, so
/// a burst of bounces keeps pushing the window forward until the line settles.
pub struct Debouncer<I: TimeInstant> {
    window: I::Duration,
    origin: I,
    last_event: I,
    accepted: u32,
    rejected: u32,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer whose first reference point is `now`.
    pub fn new(window: I::Duration, now: I) -> Self {
        Self {
            window,
            origin: now,
            last_event: now,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Records an event at `now` and returns whether it counts as a press.
    pub fn register(&mut self, now: I) -> bool {
        let elapsed = now.duration_since(self.last_event);
        let accepted = elapsed.as_millis() > self.window.as_millis();

        if accepted {
            self.accepted = self.accepted.saturating_add(1);
        } else {
            self.rejected = self.rejected.saturating_add(1);
        }
        self.last_event = now;

        accepted
    }

    /// Timestamp of the most recent event, accepted or not.
    pub fn last_event(&self) -> I {
        self.last_event
    }

    /// Time from construction to the most recent event.
    pub fn last_event_offset(&self) -> I::Duration {
        self.last_event.duration_since(self.origin)
    }

    pub fn window(&self) -> I::Duration {
        self.window
    }

    /// Number of accepted presses.
    pub fn presses(&self) -> u32 {
        self.accepted
    }

    /// Number of events dropped as bounce.
    pub fn rejected(&self) -> u32 {
        self.rejected
    }
}
