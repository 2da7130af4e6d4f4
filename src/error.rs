//! Startup validation errors.

/// Errors detected while validating the configuration or the attached strip.
///
/// Runtime paths never fail: once a sequencer is built, out-of-range pattern
/// indices are reset silently and out-of-range pixels are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// Strip has no LEDs.
    ZeroStripLength,

    /// Strip length is odd, so it cannot be split into two equal halves.
    OddStripLength(usize),

    /// A zero debounce window would accept every contact bounce.
    ZeroDebounceWindow,

    /// The pixel sink is not the length the configuration describes.
    StripLengthMismatch {
        /// Length from [`Config`](crate::Config).
        configured: usize,
        /// Length reported by the sink.
        actual: usize,
    },
}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigurationError::ZeroStripLength => {
                write!(f, "strip must have at least one LED")
            }
            ConfigurationError::OddStripLength(len) => {
                write!(f, "strip length must be even, got {}", len)
            }
            ConfigurationError::ZeroDebounceWindow => {
                write!(f, "debounce window must be non-zero")
            }
            ConfigurationError::StripLengthMismatch { configured, actual } => {
                write!(
                    f,
                    "configured strip length {} does not match attached strip of {}",
                    configured, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}

/// Checks that a strip of `len` LEDs can be split into two equal, non-empty halves.
pub const fn validate_strip_length(len: usize) -> Result<(), ConfigurationError> {
    if len == 0 {
        Err(ConfigurationError::ZeroStripLength)
    } else if len % 2 != 0 {
        Err(ConfigurationError::OddStripLength(len))
    } else {
        Ok(())
    }
}
