//! Time abstraction traits for platform-agnostic timing.
//!
//! Reading the clock goes through [`TimeSource`]. Blocking waits are a separate
//! capability, [`embedded_hal::delay::DelayNs`], so pattern routines can be driven
//! by a fake delay in tests.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration backed by a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(millis.min(u32::MAX as u64) as u32)
    }
}

/// Reading of a free-running millisecond counter, such as one bumped from SysTick.
///
/// The counter wraps after ~49.7 days; `duration_since` uses wrapping subtraction
/// so a rollover between two readings still yields the true elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}
