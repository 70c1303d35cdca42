//! Query parameters and results of the muhurta window search.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use muhurta_base::{
    AUSPICIOUS_SCORE, ActivityType, EXCELLENT_SCORE, MuhurtaFactors, TimeOfDayRange,
};
use muhurta_ephem::GeoLocation;

use crate::error::SearchError;

/// Default scan step in minutes.
pub const DEFAULT_GRANULARITY_MINUTES: i64 = 5;
/// Default number of windows returned.
pub const DEFAULT_MAX_RESULTS: usize = 20;
/// Result cap used by [`crate::MuhurtaSearchEngine::find_muhurtas_on_date`].
pub const DAY_MAX_RESULTS: usize = 50;

/// One window search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// First civil date scanned.
    pub start_date: NaiveDate,
    /// Last civil date scanned (inclusive).
    pub end_date: NaiveDate,
    pub activity: ActivityType,
    pub location: GeoLocation,
    /// Offset defining civil dates and local time of day.
    pub utc_offset: FixedOffset,
    /// Local time-of-day filter; may wrap past midnight.
    pub preferred_time: Option<TimeOfDayRange>,
    /// Minimum activity score of a qualifying instant.
    pub threshold: u8,
    /// Scan step.
    pub granularity: TimeDelta,
    pub max_results: usize,
    /// Scan sunrise to sunset instead of local 00:00 to 23:59.
    pub require_daylight: bool,
    /// Treat Rahukala, Yamaghanta, Gulikakala and Durmuhurta as hard cuts.
    pub avoid_inauspicious_periods: bool,
    /// On a score tie, represent a window by an Abhijit instant.
    pub prefer_abhijit: bool,
}

impl SearchParams {
    /// Parameters with the default threshold, granularity and flags.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        activity: ActivityType,
        location: GeoLocation,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            start_date,
            end_date,
            activity,
            location,
            utc_offset,
            preferred_time: None,
            threshold: AUSPICIOUS_SCORE,
            granularity: TimeDelta::minutes(DEFAULT_GRANULARITY_MINUTES),
            max_results: DEFAULT_MAX_RESULTS,
            require_daylight: true,
            avoid_inauspicious_periods: true,
            prefer_abhijit: true,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.end_date < self.start_date {
            return Err(SearchError::InvalidSearchParams(
                "end_date must not precede start_date",
            ));
        }
        if self.location.validate().is_err() {
            return Err(SearchError::InvalidSearchParams(
                "latitude/longitude must be finite and in range",
            ));
        }
        if self.granularity <= TimeDelta::zero() {
            return Err(SearchError::InvalidSearchParams(
                "granularity must be positive",
            ));
        }
        if self.max_results == 0 {
            return Err(SearchError::InvalidSearchParams("max_results must be > 0"));
        }
        Ok(())
    }

    /// Number of civil dates in the range.
    pub fn days(&self) -> usize {
        usize::try_from((self.end_date - self.start_date).num_days() + 1).unwrap_or(0)
    }
}

/// A maximal run of qualifying scan instants on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedWindow {
    /// First qualifying instant.
    pub start: DateTime<Utc>,
    /// Last qualifying instant.
    pub end: DateTime<Utc>,
    /// Highest activity score inside the window.
    pub score: u8,
    /// 1-based position in the result list.
    pub rank: usize,
    /// Factors of the representative instant.
    pub factors: MuhurtaFactors,
    pub positive_factors: Vec<String>,
    pub negative_factors: Vec<String>,
    pub recommendation: String,
}

impl OptimizedWindow {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn is_excellent(&self) -> bool {
        self.score >= EXCELLENT_SCORE
    }

    pub fn local_start(&self) -> NaiveDateTime {
        self.start.with_timezone(&self.factors.utc_offset).naive_local()
    }

    pub fn local_end(&self) -> NaiveDateTime {
        self.end.with_timezone(&self.factors.utc_offset).naive_local()
    }
}

/// A date that contributed no windows, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDate {
    pub date: NaiveDate,
    pub reason: String,
}

/// Ranked outcome of one search.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub activity: ActivityType,
    pub params: SearchParams,
    /// At most `max_results` windows, best first.
    pub windows: Vec<OptimizedWindow>,
    pub best_window: Option<OptimizedWindow>,
    /// Windows found before truncation.
    pub total_found: usize,
    /// Windows scoring at least 80, before truncation.
    pub excellent_count: usize,
    pub skipped_dates: Vec<SkippedDate>,
    /// Scanning ended before `end_date` because enough excellent windows were found.
    pub stopped_early: bool,
    pub elapsed: Duration,
}

impl OptimizationResult {
    /// Plain-text report of the search and its best window.
    pub fn to_summary_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MUHURTA OPTIMIZATION RESULTS")?;
        writeln!(f, "{}", "═".repeat(50))?;
        writeln!(f, "Activity: {}", self.activity)?;
        writeln!(
            f,
            "Search Period: {} to {}",
            self.params.start_date, self.params.end_date
        )?;
        writeln!(f, "Total Windows Found: {}", self.total_found)?;
        writeln!(f, "Excellent Windows (80+): {}", self.excellent_count)?;
        if !self.skipped_dates.is_empty() {
            writeln!(f, "Skipped Dates: {}", self.skipped_dates.len())?;
        }
        if self.stopped_early {
            writeln!(f, "Search stopped early after enough excellent windows")?;
        }

        let Some(best) = &self.best_window else {
            return Ok(());
        };
        let p = &best.factors.panchanga;
        writeln!(f)?;
        writeln!(f, "BEST MUHURTA")?;
        writeln!(f, "{}", "─".repeat(50))?;
        writeln!(f, "Date/Time: {}", best.local_start().format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "Score: {}/100", best.score)?;
        writeln!(f, "Day: {}", p.vara)?;
        writeln!(f, "Nakshatra: {}", p.nakshatra.nakshatra)?;
        writeln!(f, "Tithi: {}", p.tithi)?;
        writeln!(f)?;
        writeln!(f, "Positive Factors:")?;
        for s in &best.positive_factors {
            writeln!(f, "  + {s}")?;
        }
        if !best.negative_factors.is_empty() {
            writeln!(f, "Considerations:")?;
            for s in &best.negative_factors {
                writeln!(f, "  - {s}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::new(
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 23).unwrap(),
            ActivityType::Marriage,
            GeoLocation::new(28.6139, 77.209, 0.0),
            FixedOffset::east_opt(19_800).unwrap(),
        )
    }

    #[test]
    fn defaults() {
        let p = params();
        assert_eq!(p.threshold, 60);
        assert_eq!(p.granularity, TimeDelta::minutes(5));
        assert_eq!(p.max_results, 20);
        assert!(p.require_daylight && p.avoid_inauspicious_periods && p.prefer_abhijit);
        assert_eq!(p.days(), 7);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let p = SearchParams {
            end_date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            ..params()
        };
        assert!(matches!(
            p.validate(),
            Err(SearchError::InvalidSearchParams(_))
        ));
    }

    #[test]
    fn rejects_bad_location() {
        let p = SearchParams {
            location: GeoLocation::new(f64::NAN, 0.0, 0.0),
            ..params()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_zero_granularity_and_results() {
        let p = SearchParams {
            granularity: TimeDelta::zero(),
            ..params()
        };
        assert!(p.validate().is_err());
        let p = SearchParams {
            max_results: 0,
            ..params()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn single_day_range_is_valid() {
        let p = SearchParams {
            end_date: params().start_date,
            ..params()
        };
        assert!(p.validate().is_ok());
        assert_eq!(p.days(), 1);
    }
}
