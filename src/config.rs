//! Compile-time configuration.
//!
//! Boards start from [`Config::DEFAULT`] and override fields with struct update
//! syntax, keeping the result `const`:
//!
//! ```
//! use warning_lights::Config;
//!
//! const CONFIG: Config = Config {
//!     strip_length: 32,
//!     brightness: 64,
//!     ..Config::DEFAULT
//! };
//! assert!(CONFIG.validate().is_ok());
//! ```

use crate::error::{ConfigurationError, validate_strip_length};

/// Wait used between flashes, in three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashSpeed {
    Slow,
    Medium,
    Quick,
}

/// Hardware wiring and timing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// GPIO connected to the pattern button (pulled up, pressed pulls low).
    pub button_pin: u8,
    /// Minimum spacing between accepted button presses.
    pub debounce_ms: u32,
    /// GPIO driving the strip's data line.
    pub strip_pin: u8,
    /// Global brightness, 0 (off) to 255 (full).
    pub brightness: u8,
    /// Number of LEDs on the strip. Must be even.
    pub strip_length: usize,
    pub flash_slow_ms: u32,
    pub flash_medium_ms: u32,
    pub flash_quick_ms: u32,
    /// Highest pattern index the button can reach before wrapping to 0.
    pub pattern_count: u8,
    /// Pause after a status dump so it can be read.
    pub status_pause_ms: u32,
    /// Seed for the lightning flash index generator.
    pub random_seed: u64,
    /// Run the channel-order self-test at startup.
    pub run_self_test: bool,
}

impl Config {
    pub const DEFAULT: Config = Config {
        button_pin: 2,
        debounce_ms: 150,
        strip_pin: 10,
        brightness: 20,
        strip_length: 20,
        flash_slow_ms: 250,
        flash_medium_ms: 50,
        flash_quick_ms: 10,
        pattern_count: 21,
        status_pause_ms: 2500,
        random_seed: 0x5EED_F1A5,
        run_self_test: false,
    };

    /// Checks the values patterns and the debouncer depend on.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if let Err(err) = validate_strip_length(self.strip_length) {
            return Err(err);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigurationError::ZeroDebounceWindow);
        }
        Ok(())
    }

    /// Returns the wait for a speed tier in milliseconds.
    pub const fn flash_delay(&self, speed: FlashSpeed) -> u32 {
        match speed {
            FlashSpeed::Slow => self.flash_slow_ms,
            FlashSpeed::Medium => self.flash_medium_ms,
            FlashSpeed::Quick => self.flash_quick_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
