//! Pattern sequencer: the main loop that plays patterns and handles button presses.
//!
//! Provides [`PatternSequencer`], which owns the [`PatternLibrary`], the
//! [`Debouncer`] and the current pattern index, and reads press events from a
//! shared [`ButtonFlag`].

use crate::button::{ButtonFlag, Debouncer};
use crate::config::Config;
use crate::error::ConfigurationError;
use crate::patterns::PatternLibrary;
use crate::status::StatusReport;
use crate::strip::PixelSink;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::Pattern;
use embedded_hal::delay::DelayNs;

/// What a single loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Iteration {
    /// A press was accepted and the index moved.
    Advanced { from: u8, to: u8 },
    /// A press arrived inside the debounce window and was dropped.
    Debounced,
    /// No press was pending; the pattern ran to completion.
    Played(Pattern),
    /// The index had no bound pattern and was reset to 0.
    Reset { from: u8 },
}

/// Cycles through warning-light patterns on button presses.
///
/// Each iteration either handles a pending press or plays the current pattern
/// once. Patterns block until done, so a press made mid-pattern takes effect
/// when the pattern returns.
///
/// # Type Parameters
/// * `'a` - Lifetime of the button flag and time source references
/// * `I` - Time instant type
/// * `S` - Pixel sink implementation type
/// * `D` - Delay implementation type
/// * `T` - Time source implementation type
pub struct PatternSequencer<'a, I, S, D, T>
where
    I: TimeInstant,
    S: PixelSink,
    D: DelayNs,
    T: TimeSource<I>,
{
    library: PatternLibrary<S, D>,
    button: &'a ButtonFlag,
    time_source: &'a T,
    debouncer: Debouncer<I>,
    pattern_index: u8,
    pattern_count: u8,
    status_pause_ms: u32,
}

impl<'a, I, S, D, T> PatternSequencer<'a, I, S, D, T>
where
    I: TimeInstant,
    S: PixelSink,
    D: DelayNs,
    T: TimeSource<I>,
{
    /// Validates `config` against the attached strip, blanks the strip and,
    /// if configured, runs the self-test.
    ///
    /// The debounce reference point is the time of construction.
    pub fn new(
        mut library: PatternLibrary<S, D>,
        button: &'a ButtonFlag,
        time_source: &'a T,
        config: &Config,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let actual = library.sink().len();
        if actual != config.strip_length {
            return Err(ConfigurationError::StripLengthMismatch {
                configured: config.strip_length,
                actual,
            });
        }

        library.blank();
        if config.run_self_test {
            library.self_test();
        }

        let window = I::Duration::from_millis(config.debounce_ms as u64);
        let debouncer = Debouncer::new(window, time_source.now());

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Sequencer ready: {} LEDs, patterns 0..={}",
            config.strip_length,
            config.pattern_count
        );

        Ok(Self {
            library,
            button,
            time_source,
            debouncer,
            pattern_index: 0,
            pattern_count: config.pattern_count,
            status_pause_ms: config.status_pause_ms,
        })
    }

    /// Runs one loop iteration.
    ///
    /// A pending press takes priority: it is handled instead of playing a pattern.
    pub fn step(&mut self) -> Iteration {
        if self.button.is_pending() {
            return self.advance();
        }

        match Pattern::from_index(self.pattern_index) {
            Some(pattern) => {
                self.library.run(pattern);
                Iteration::Played(pattern)
            }
            None => {
                let from = self.pattern_index;
                self.pattern_index = 0;

                #[cfg(feature = "defmt")]
                defmt::debug!("No pattern at index {}, back to 0", from);

                Iteration::Reset { from }
            }
        }
    }

    /// Handles a press event.
    ///
    /// If more than the debounce window has passed since the previous event the
    /// index moves forward, wrapping to 0 past `pattern_count`. Either way the
    /// event timestamp is updated and the press flag is cleared.
    pub fn advance(&mut self) -> Iteration {
        let now = self.time_source.now();
        let from = self.pattern_index;
        let accepted = self.debouncer.register(now);

        self.button.clear();

        if !accepted {
            #[cfg(feature = "defmt")]
            defmt::debug!("Press ignored (bounce)");

            return Iteration::Debounced;
        }

        self.pattern_index = if from >= self.pattern_count { 0 } else { from + 1 };

        #[cfg(feature = "defmt")]
        defmt::info!("Pattern {} -> {}", from, self.pattern_index);

        Iteration::Advanced {
            from,
            to: self.pattern_index,
        }
    }

    /// Runs the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns a snapshot of the button and pattern state.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            last_press_ms: self.debouncer.last_event_offset().as_millis(),
            presses: self.debouncer.presses(),
            rejected_presses: self.debouncer.rejected(),
            pending: self.button.is_pending(),
            pattern_index: self.pattern_index,
            pattern: Pattern::from_index(self.pattern_index),
        }
    }

    /// Writes the status dump to `out`, then blocks for the configured pause.
    pub fn report_status<W: core::fmt::Write>(&mut self, out: &mut W) -> core::fmt::Result {
        let status = self.status();
        write!(out, "{}", status)?;
        self.library.pause(self.status_pause_ms);
        Ok(())
    }

    /// Returns the current pattern index.
    pub fn pattern_index(&self) -> u8 {
        self.pattern_index
    }

    /// Returns the pattern at the current index, if one is bound.
    pub fn current_pattern(&self) -> Option<Pattern> {
        Pattern::from_index(self.pattern_index)
    }

    /// Highest index before wrapping to 0.
    pub fn pattern_count(&self) -> u8 {
        self.pattern_count
    }

    pub fn debouncer(&self) -> &Debouncer<I> {
        &self.debouncer
    }

    pub fn library(&self) -> &PatternLibrary<S, D> {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut PatternLibrary<S, D> {
        &mut self.library
    }
}
