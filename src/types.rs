//! The pattern table: which animation each button position selects.

/// A warning-light pattern bound to a position in the button cycle.
///
/// Indices without a variant are valid positions for the pattern counter but
/// have no animation; the sequencer resets to [`Pattern::Off`] when it lands on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pattern {
    /// Strip dark.
    Off = 0,
    /// Random blue, white and red strikes across the whole strip.
    PoliceLightning = 1,
    /// Blue/red halves with white between each swap.
    PoliceWigWagWhite = 2,
    /// Amber arrow growing outward from the center.
    AmberCenterArrow = 3,
    /// Left half strobes blue/red, then right half blinks red.
    SplitStrobe = 4,
    /// Blue left half, then red right half.
    PoliceWigWag = 5,
    /// Red halves with white between.
    FireWigWagWhite = 6,
    /// Red left half, then white right half.
    EmsWigWag = 7,
    /// Amber window sweeping end to end.
    AmberCylon = 8,
    /// Single amber pixel running right to left.
    AmberArrowLeft = 9,
    /// Single amber pixel running left to right.
    AmberArrowRight = 10,
    /// Amber halves swapping.
    AmberWigWag = 11,
    /// Whole strip steady white.
    Floodlight = 12,
}

impl Pattern {
    /// Every bound pattern in index order.
    pub const ALL: [Pattern; 13] = [
        Pattern::Off,
        Pattern::PoliceLightning,
        Pattern::PoliceWigWagWhite,
        Pattern::AmberCenterArrow,
        Pattern::SplitStrobe,
        Pattern::PoliceWigWag,
        Pattern::FireWigWagWhite,
        Pattern::EmsWigWag,
        Pattern::AmberCylon,
        Pattern::AmberArrowLeft,
        Pattern::AmberArrowRight,
        Pattern::AmberWigWag,
        Pattern::Floodlight,
    ];

    /// Resolves a counter position to its pattern, or `None` if nothing is bound there.
    pub const fn from_index(index: u8) -> Option<Pattern> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_index_order() {
        for (position, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.index() as usize, position);
            assert_eq!(Pattern::from_index(position as u8), Some(*pattern));
        }
    }

    #[test]
    fn unbound_indices_resolve_to_none() {
        assert_eq!(Pattern::from_index(13), None);
        assert_eq!(Pattern::from_index(u8::MAX), None);
    }
}
