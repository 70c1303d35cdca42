//! Error types for position providers.

use thiserror::Error;

/// Errors surfaced by a [`crate::PositionProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backend cannot produce the requested quantity (missing data,
    /// out-of-range epoch, polar day/night for rise/set).
    #[error("position unavailable for {body}: {reason}")]
    PositionUnavailable {
        body: &'static str,
        reason: &'static str,
    },
    /// Geographic coordinates are non-finite or out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}

impl EphemerisError {
    /// Shorthand for a [`EphemerisError::PositionUnavailable`].
    pub const fn unavailable(body: &'static str, reason: &'static str) -> Self {
        Self::PositionUnavailable { body, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_position_unavailable() {
        let e = EphemerisError::unavailable("Moon", "epoch outside supported range");
        assert_eq!(
            e.to_string(),
            "position unavailable for Moon: epoch outside supported range"
        );
    }

    #[test]
    fn display_invalid_location() {
        let e = EphemerisError::InvalidLocation("latitude must be finite");
        assert_eq!(e.to_string(), "invalid location: latitude must be finite");
    }
}
