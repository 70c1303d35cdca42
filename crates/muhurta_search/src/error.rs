//! Error types for provider-driven computations and the window search.

use chrono::NaiveDate;
use muhurta_base::MuhurtaError;
use muhurta_ephem::EphemerisError;
use thiserror::Error;

/// Errors from snapshots, boundary search and the window search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Search parameters rejected before any scan.
    #[error("invalid search parameters: {0}")]
    InvalidSearchParams(&'static str),
    /// Engine configuration rejected by validation.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The position provider could not answer.
    #[error(transparent)]
    PositionUnavailable(#[from] EphemerisError),
    /// Sunrise/sunset of `date` cannot be partitioned.
    #[error("degenerate daylight on {date}: {reason}")]
    DegenerateDaylight { date: NaiveDate, reason: String },
    /// The classification did not change within the search horizon.
    #[error("no boundary found within {horizon_minutes} minutes")]
    BoundaryNotFound { horizon_minutes: i64 },
    /// Error from the pure classification layer.
    #[error(transparent)]
    Muhurta(#[from] MuhurtaError),
    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Re-tag a partitioning failure of `date` as [`SearchError::DegenerateDaylight`].
    pub(crate) fn for_date(date: NaiveDate, e: MuhurtaError) -> Self {
        match e {
            MuhurtaError::DegenerateDaylight { .. } | MuhurtaError::DegenerateNight { .. } => {
                Self::DegenerateDaylight {
                    date,
                    reason: e.to_string(),
                }
            }
            other => Self::Muhurta(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn display_boundary_not_found() {
        let e = SearchError::BoundaryNotFound {
            horizon_minutes: 4320,
        };
        assert_eq!(e.to_string(), "no boundary found within 4320 minutes");
    }

    #[test]
    fn provider_error_is_transparent() {
        let e: SearchError = EphemerisError::unavailable("Sun", "polar day").into();
        assert_eq!(e.to_string(), "position unavailable for Sun: polar day");
    }

    #[test]
    fn degenerate_partition_retagged() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let e = SearchError::for_date(
            date,
            MuhurtaError::DegenerateDaylight {
                sunrise: t,
                sunset: t,
            },
        );
        assert!(matches!(e, SearchError::DegenerateDaylight { date: d, .. } if d == date));

        let passthrough = SearchError::for_date(date, MuhurtaError::InvalidInput("x"));
        assert_eq!(passthrough, SearchError::Muhurta(MuhurtaError::InvalidInput("x")));
    }
}
