//! Diagnostic snapshot of the sequencer.

use crate::types::Pattern;
use core::fmt;

const RULE: &str = "-----------------------------------------------";

/// Snapshot of button and pattern state, printed while debugging wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Time of the most recent button event, in ms since the sequencer started.
    pub last_press_ms: u64,
    /// Accepted presses.
    pub presses: u32,
    /// Presses dropped as bounce.
    pub rejected_presses: u32,
    /// A press is waiting for the main loop.
    pub pending: bool,
    pub pattern_index: u8,
    /// `None` when the index has no bound pattern.
    pub pattern: Option<Pattern>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "             SEQUENCER STATUS")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Last button event (ms):  {}", self.last_press_ms)?;
        writeln!(f, "Accepted presses:        {}", self.presses)?;
        writeln!(f, "Rejected presses:        {}", self.rejected_presses)?;
        writeln!(f, "Press pending:           {}", self.pending)?;
        writeln!(f, "Pattern index:           {}", self.pattern_index)?;
        match self.pattern {
            Some(pattern) => writeln!(f, "Pattern:                 {:?}", pattern)?,
            None => writeln!(f, "Pattern:                 (unbound)")?,
        }
        writeln!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn display_lists_every_field() {
        let report = StatusReport {
            last_press_ms: 1234,
            presses: 3,
            rejected_presses: 1,
            pending: false,
            pattern_index: 2,
            pattern: Some(Pattern::PoliceWigWagWhite),
        };

        let text = report.to_string();
        assert!(text.contains("Last button event (ms):  1234"));
        assert!(text.contains("Accepted presses:        3"));
        assert!(text.contains("Rejected presses:        1"));
        assert!(text.contains("Press pending:           false"));
        assert!(text.contains("Pattern index:           2"));
        assert!(text.contains("PoliceWigWagWhite"));
        assert!(text.starts_with(RULE));
    }

    #[test]
    fn display_marks_unbound_index() {
        let report = StatusReport {
            last_press_ms: 0,
            presses: 0,
            rejected_presses: 0,
            pending: true,
            pattern_index: 17,
            pattern: None,
        };

        assert!(report.to_string().contains("(unbound)"));
    }
}
