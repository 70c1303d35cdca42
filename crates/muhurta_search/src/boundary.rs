//! Next-transition search for any discrete classification.
//!
//! A coarse forward scan at `step` finds the first bracket where the
//! classification differs from its value at the start; bisection then
//! narrows the bracket to `precision`. Each sample depends on the previous
//! one, so the search is sequential.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::error::SearchError;

/// Step, horizon and precision of a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Coarse scan step.
    pub step: TimeDelta,
    /// Give up after scanning this far past the start.
    pub horizon: TimeDelta,
    /// Bisection stops once the bracket is this narrow.
    pub precision: TimeDelta,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            step: TimeDelta::minutes(5),
            horizon: TimeDelta::hours(72),
            precision: TimeDelta::minutes(1),
        }
    }
}

impl BoundaryConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.step <= TimeDelta::zero() {
            return Err("boundary step must be positive");
        }
        if self.precision <= TimeDelta::zero() {
            return Err("boundary precision must be positive");
        }
        if self.precision > self.step {
            return Err("boundary precision must not exceed the step");
        }
        if self.horizon < self.step {
            return Err("boundary horizon must be at least one step");
        }
        Ok(())
    }
}

/// Finds the first instant at which a classification changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryFinder {
    config: BoundaryConfig,
}

impl BoundaryFinder {
    pub fn new(config: BoundaryConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// First instant after `start` (to within `precision`, never early) where
    /// `classify` returns something other than `classify(start)`.
    ///
    /// Fails with [`SearchError::BoundaryNotFound`] if the value holds for
    /// the whole horizon. Errors from `classify` propagate unchanged.
    pub fn find<K, F>(&self, start: DateTime<Utc>, mut classify: F) -> Result<DateTime<Utc>, SearchError>
    where
        K: PartialEq,
        F: FnMut(DateTime<Utc>) -> Result<K, SearchError>,
    {
        let BoundaryConfig {
            step,
            horizon,
            precision,
        } = self.config;
        let initial = classify(start)?;
        let end = start + horizon;

        let mut t_prev = start;
        loop {
            let t_curr = (t_prev + step).min(end);
            if classify(t_curr)? != initial {
                let t = bisect_change(t_prev, t_curr, precision, &initial, &mut classify)?;
                debug!(%start, boundary = %t, "classification boundary found");
                return Ok(t);
            }
            if t_curr >= end {
                break;
            }
            t_prev = t_curr;
        }

        Err(SearchError::BoundaryNotFound {
            horizon_minutes: horizon.num_minutes(),
        })
    }
}

/// Narrow `(same, changed]` until it is no wider than `precision`.
fn bisect_change<K, F>(
    mut same: DateTime<Utc>,
    mut changed: DateTime<Utc>,
    precision: TimeDelta,
    initial: &K,
    classify: &mut F,
) -> Result<DateTime<Utc>, SearchError>
where
    K: PartialEq,
    F: FnMut(DateTime<Utc>) -> Result<K, SearchError>,
{
    while changed - same > precision {
        let mid = same + (changed - same) / 2;
        if classify(mid)? == *initial {
            same = mid;
        } else {
            changed = mid;
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap()
    }

    fn step_at(change: DateTime<Utc>) -> impl FnMut(DateTime<Utc>) -> Result<u8, SearchError> {
        move |t| Ok(if t < change { 1 } else { 2 })
    }

    #[test]
    fn default_config_valid() {
        assert!(BoundaryConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_precision_above_step() {
        let c = BoundaryConfig {
            precision: TimeDelta::minutes(10),
            ..BoundaryConfig::default()
        };
        assert!(matches!(
            BoundaryFinder::new(c),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_step() {
        let c = BoundaryConfig {
            step: TimeDelta::zero(),
            ..BoundaryConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn finds_change_within_precision() {
        let change = t0() + TimeDelta::seconds(7 * 3600 + 13 * 60 + 29);
        let f = BoundaryFinder::new(BoundaryConfig::default()).unwrap();
        let t = f.find(t0(), step_at(change)).unwrap();
        assert!(t >= change, "boundary reported early: {t}");
        assert!(t - change <= TimeDelta::minutes(1), "boundary {t} vs {change}");
    }

    #[test]
    fn change_on_first_step() {
        let change = t0() + TimeDelta::seconds(30);
        let f = BoundaryFinder::new(BoundaryConfig::default()).unwrap();
        let t = f.find(t0(), step_at(change)).unwrap();
        assert!(t >= change && t - change <= TimeDelta::minutes(1));
    }

    #[test]
    fn change_exactly_at_horizon() {
        let c = BoundaryConfig::default();
        let change = t0() + c.horizon;
        let f = BoundaryFinder::new(c).unwrap();
        assert_eq!(f.find(t0(), step_at(change)).unwrap(), change);
    }

    #[test]
    fn not_found_within_horizon() {
        let f = BoundaryFinder::new(BoundaryConfig::default()).unwrap();
        let r = f.find(t0(), |_| Ok::<_, SearchError>(3u8));
        assert_eq!(
            r,
            Err(SearchError::BoundaryNotFound {
                horizon_minutes: 72 * 60
            })
        );
    }

    #[test]
    fn classifier_error_propagates() {
        let f = BoundaryFinder::new(BoundaryConfig::default()).unwrap();
        let r = f.find(t0(), |_| -> Result<u8, SearchError> {
            Err(SearchError::InvalidSearchParams("injected"))
        });
        assert_eq!(r, Err(SearchError::InvalidSearchParams("injected")));
    }
}
