//! Error types for muhurta classification and partitioning.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from the pure muhurta calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MuhurtaError {
    /// Malformed input (out-of-range number, inverted interval, ...).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Sunset is not strictly after sunrise, so daylight cannot be divided.
    #[error("degenerate daylight: sunset {sunset} is not after sunrise {sunrise}")]
    DegenerateDaylight {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Next sunrise is not strictly after sunset, so night cannot be divided.
    #[error("degenerate night: next sunrise {next_sunrise} is not after sunset {sunset}")]
    DegenerateNight {
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    },
}
