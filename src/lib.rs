#![cfg_attr(not(feature = "std"), no_std)]

//! Police, fire and EMS warning-light patterns for an addressable LED strip,
//! advanced by a single push button.
//!
//! # Core Concepts
//!
//! - **`PixelSink`**: Trait for the LED strip; `LedStrip` implements it over any `smart-leds` driver
//! - **`PatternLibrary`**: Blocking animation routines (flash, wig-wag, lightning, cylon, arrows)
//! - **`Pattern`**: The table of patterns the button cycles through
//! - **`ButtonFlag`**: Press flag set from the GPIO interrupt, read by the main loop
//! - **`Debouncer`**: Drops presses that arrive inside the debounce window
//! - **`PatternSequencer`**: The main loop tying the above together
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Config`**: Pins, strip length, brightness and flash speeds
//!
//! Waits go through `embedded_hal::delay::DelayNs`, so any HAL delay works on
//! hardware and tests can substitute a recording fake.
//!
//! # Wiring it up
//!
//! ```ignore
//! static BUTTON: ButtonFlag = ButtonFlag::new();
//!
//! // in the GPIO falling-edge interrupt:
//! BUTTON.signal();
//!
//! // in main:
//! let strip = LedStrip::<_, 20>::new(ws2812, CONFIG.brightness)?;
//! let library = PatternLibrary::new(strip, delay, &CONFIG);
//! let mut sequencer = PatternSequencer::new(library, &BUTTON, &clock, &CONFIG)?;
//! sequencer.run()
//! ```

pub mod button;
pub mod colors;
pub mod config;
pub mod error;
pub mod patterns;
pub mod sequencer;
pub mod status;
pub mod strip;
pub mod time;
pub mod types;

pub use button::{ButtonFlag, Debouncer};
pub use colors::{AMBER, BLACK, BLUE, Color, GREEN, RED, WHITE};
pub use config::{Config, FlashSpeed};
pub use error::ConfigurationError;
pub use patterns::{CenterFrame, CenterOut, FlashSpeeds, MAX_SIMULTANEOUS, PatternLibrary};
pub use sequencer::{Iteration, PatternSequencer};
pub use status::StatusReport;
pub use strip::{LedStrip, PixelSink};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use types::Pattern;
