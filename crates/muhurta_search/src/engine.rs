//! Multi-day muhurta window search.
//!
//! Each civil date is scanned independently at the query granularity; a
//! window is a maximal run of qualifying instants and never crosses a date.
//! Dates run on the engine's worker pool and their windows are merged and
//! ranked once every date has finished.

use std::time::Instant;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use muhurta_base::{
    AUSPICIOUS_SCORE, ActivityAssessment, ActivityType, MuhurtaFactors, MuhurtaSnapshot,
    TimePeriod, evaluate_for_activity, recommendation_for,
};
use muhurta_ephem::{GeoLocation, PositionProvider};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, info_span, warn};

use crate::config::{FailurePolicy, SearchConfig};
use crate::context::{DayContext, local_instant, muhurta_at};
use crate::engine_types::{
    DAY_MAX_RESULTS, OptimizationResult, OptimizedWindow, SearchParams, SkippedDate,
};
use crate::error::SearchError;

/// Searches date ranges for windows suited to an activity.
pub struct MuhurtaSearchEngine<P> {
    provider: P,
    config: SearchConfig,
    pool: ThreadPool,
}

impl<P: PositionProvider> MuhurtaSearchEngine<P> {
    /// Engine over `provider` with its own worker pool.
    pub fn new(provider: P, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .thread_name(|i| format!("muhurta-search-{i}"))
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;
        Ok(Self {
            provider,
            config,
            pool,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Generic evaluation of a single instant.
    pub fn snapshot_at(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        utc_offset: FixedOffset,
    ) -> Result<MuhurtaSnapshot, SearchError> {
        muhurta_at(&self.provider, instant, location, utc_offset)
    }

    /// Scan every date of `params` and rank the qualifying windows.
    pub fn find_optimal_windows(
        &self,
        params: &SearchParams,
    ) -> Result<OptimizationResult, SearchError> {
        params.validate()?;
        let started = Instant::now();
        let dates: Vec<NaiveDate> = params
            .start_date
            .iter_days()
            .take_while(|d| *d <= params.end_date)
            .collect();

        let span = info_span!(
            "find_optimal_windows",
            activity = params.activity.key(),
            days = dates.len()
        );
        let _guard = span.enter();

        let chunk = if self.config.stop_after_excellent {
            self.pool.current_num_threads().max(1)
        } else {
            dates.len().max(1)
        };

        let mut windows = Vec::new();
        let mut skipped_dates = Vec::new();
        let mut stopped_early = false;
        let mut scanned = 0;

        for batch in dates.chunks(chunk) {
            let outcomes: Vec<(NaiveDate, Result<Vec<OptimizedWindow>, SearchError>)> =
                self.pool.install(|| {
                    batch
                        .par_iter()
                        .map(|&date| (date, self.scan_date(date, params)))
                        .collect()
                });

            for (date, outcome) in outcomes {
                match outcome {
                    Ok(found) => windows.extend(found),
                    Err(e @ SearchError::DegenerateDaylight { .. }) => {
                        warn!(%date, error = %e, "skipping date with degenerate daylight");
                        skipped_dates.push(SkippedDate {
                            date,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => match self.config.failure_policy {
                        FailurePolicy::AbortSearch => return Err(e),
                        FailurePolicy::SkipDate => {
                            warn!(%date, error = %e, "skipping date");
                            skipped_dates.push(SkippedDate {
                                date,
                                reason: e.to_string(),
                            });
                        }
                    },
                }
            }

            scanned += batch.len();
            if self.config.stop_after_excellent
                && scanned < dates.len()
                && windows.iter().filter(|w| w.is_excellent()).count() >= params.max_results
            {
                info!(scanned, "enough excellent windows, stopping early");
                stopped_early = true;
                break;
            }
        }

        windows.sort_by(|a, b| b.score.cmp(&a.score).then(a.start.cmp(&b.start)));
        let total_found = windows.len();
        let excellent_count = windows.iter().filter(|w| w.is_excellent()).count();
        windows.truncate(params.max_results);
        for (i, w) in windows.iter_mut().enumerate() {
            w.rank = i + 1;
        }

        let elapsed = started.elapsed();
        info!(
            total_found,
            excellent_count,
            returned = windows.len(),
            skipped = skipped_dates.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "muhurta search complete"
        );

        Ok(OptimizationResult {
            activity: params.activity,
            params: params.clone(),
            best_window: windows.first().cloned(),
            windows,
            total_found,
            excellent_count,
            skipped_dates,
            stopped_early,
            elapsed,
        })
    }

    /// The single best window of `params`, if any.
    pub fn find_best_muhurta(
        &self,
        params: &SearchParams,
    ) -> Result<Option<OptimizedWindow>, SearchError> {
        let params = SearchParams {
            max_results: 1,
            ..params.clone()
        };
        Ok(self.find_optimal_windows(&params)?.best_window)
    }

    /// Every window of one date; `threshold` defaults to 60.
    pub fn find_muhurtas_on_date(
        &self,
        date: NaiveDate,
        activity: ActivityType,
        location: GeoLocation,
        utc_offset: FixedOffset,
        threshold: Option<u8>,
    ) -> Result<OptimizationResult, SearchError> {
        let params = SearchParams {
            threshold: threshold.unwrap_or(AUSPICIOUS_SCORE),
            max_results: DAY_MAX_RESULTS,
            ..SearchParams::new(date, date, activity, location, utc_offset)
        };
        self.find_optimal_windows(&params)
    }

    fn scan_date(
        &self,
        date: NaiveDate,
        params: &SearchParams,
    ) -> Result<Vec<OptimizedWindow>, SearchError> {
        let ctx = DayContext::load(&self.provider, date, params.location, params.utc_offset)?;
        let Some(interval) = scan_interval(&ctx, params)? else {
            debug!(%date, "empty scan interval");
            return Ok(Vec::new());
        };

        let mut windows = Vec::new();
        let mut open: Option<OpenWindow> = None;
        let mut samples = 0usize;

        for t in sample_instants(interval, params.granularity) {
            samples += 1;
            // A window may not step over a period lying between two samples
            if params.avoid_inauspicious_periods
                && open
                    .as_ref()
                    .is_some_and(|w| ctx.frame.inauspicious.any_between(w.last, t))
            {
                if let Some(w) = open.take() {
                    windows.push(w.close(params.activity));
                }
            }

            let factors = ctx.factors_at(&self.provider, t)?;
            let assessment = evaluate_for_activity(&factors, params.activity);
            let qualifies = assessment.score >= params.threshold
                && !(params.avoid_inauspicious_periods && factors.in_inauspicious_period())
                && params
                    .preferred_time
                    .is_none_or(|r| r.contains_inclusive(factors.local_time()));

            if !qualifies {
                if let Some(w) = open.take() {
                    windows.push(w.close(params.activity));
                }
                continue;
            }
            match open.as_mut() {
                Some(w) => w.extend(t, factors, assessment, params.prefer_abhijit),
                None => {
                    open = Some(OpenWindow {
                        start: t,
                        last: t,
                        factors,
                        assessment,
                    })
                }
            }
        }
        if let Some(w) = open.take() {
            windows.push(w.close(params.activity));
        }

        debug!(%date, samples, windows = windows.len(), "date scanned");
        Ok(windows)
    }
}

/// A window still accepting instants.
struct OpenWindow {
    start: DateTime<Utc>,
    last: DateTime<Utc>,
    factors: MuhurtaFactors,
    assessment: ActivityAssessment,
}

impl OpenWindow {
    fn extend(
        &mut self,
        t: DateTime<Utc>,
        factors: MuhurtaFactors,
        assessment: ActivityAssessment,
        prefer_abhijit: bool,
    ) {
        self.last = t;
        let better = assessment.score > self.assessment.score
            || (prefer_abhijit
                && assessment.score == self.assessment.score
                && factors.is_abhijit_active()
                && !self.factors.is_abhijit_active());
        if better {
            self.factors = factors;
            self.assessment = assessment;
        }
    }

    fn close(self, activity: ActivityType) -> OptimizedWindow {
        let score = self.assessment.score;
        OptimizedWindow {
            start: self.start,
            end: self.last,
            score,
            rank: 0,
            factors: self.factors,
            positive_factors: self.assessment.reasons,
            negative_factors: self.assessment.warnings,
            recommendation: recommendation_for(score, activity),
        }
    }
}

/// Daylight or local 00:00-23:59, narrowed by a non-wrapping preferred range.
///
/// Daylight is clipped to the civil date, so a sunset after local midnight
/// ends the scan at 23:59. `None` when the narrowing leaves nothing.
fn scan_interval(
    ctx: &DayContext,
    params: &SearchParams,
) -> Result<Option<TimePeriod>, SearchError> {
    let date = ctx.date();
    let (day_start, day_end) = ctx.local_span()?;
    let (mut start, mut end) = if params.require_daylight {
        let civil = ctx.civil();
        (civil.sunrise.max(day_start), civil.sunset.min(day_end))
    } else {
        (day_start, day_end)
    };
    if let Some(range) = params.preferred_time.filter(|r| !r.wraps_midnight()) {
        start = start.max(local_instant(date, range.start, params.utc_offset)?);
        end = end.min(local_instant(date, range.end, params.utc_offset)?);
    }
    if end < start {
        return Ok(None);
    }
    Ok(Some(TimePeriod { start, end }))
}

/// `start + k * step` while before `end`, then `end` itself.
fn sample_instants(
    interval: TimePeriod,
    step: TimeDelta,
) -> impl Iterator<Item = DateTime<Utc>> {
    let TimePeriod { start, end } = interval;
    std::iter::successors(Some(start), move |t| Some(*t + step))
        .take_while(move |t| *t < end)
        .chain(std::iter::once(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{LinearProvider, delhi, ist, ist_at};
    use chrono::TimeZone;
    use muhurta_base::TimeOfDayRange;

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
    }

    fn engine() -> MuhurtaSearchEngine<LinearProvider> {
        let config = SearchConfig {
            worker_threads: 2,
            ..SearchConfig::default()
        };
        MuhurtaSearchEngine::new(LinearProvider::ist(), config).unwrap()
    }

    fn one_day(activity: ActivityType) -> SearchParams {
        SearchParams::new(sunday(), sunday(), activity, delhi(), ist())
    }

    #[test]
    fn samples_include_both_endpoints() {
        let start = Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap();
        let end = start + TimeDelta::minutes(12);
        let v: Vec<_> = sample_instants(TimePeriod { start, end }, TimeDelta::minutes(5)).collect();
        assert_eq!(
            v,
            vec![
                start,
                start + TimeDelta::minutes(5),
                start + TimeDelta::minutes(10),
                end
            ]
        );
    }

    #[test]
    fn aligned_samples_do_not_repeat_end() {
        let start = Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap();
        let end = start + TimeDelta::minutes(10);
        let v: Vec<_> = sample_instants(TimePeriod { start, end }, TimeDelta::minutes(5)).collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v.last(), Some(&end));
    }

    #[test]
    fn full_day_interval_without_daylight() {
        let p = LinearProvider::ist();
        let ctx = DayContext::load(&p, sunday(), delhi(), ist()).unwrap();
        let params = SearchParams {
            require_daylight: false,
            ..one_day(ActivityType::Travel)
        };
        let iv = scan_interval(&ctx, &params).unwrap().unwrap();
        assert_eq!(iv.start, ist_at(sunday(), 0, 0));
        assert_eq!(iv.end, ist_at(sunday(), 23, 59));
    }

    #[test]
    fn preferred_range_narrows_interval() {
        let p = LinearProvider::ist();
        let ctx = DayContext::load(&p, sunday(), delhi(), ist()).unwrap();
        let params = SearchParams {
            preferred_time: Some(TimeOfDayRange::new(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            )),
            ..one_day(ActivityType::Travel)
        };
        let iv = scan_interval(&ctx, &params).unwrap().unwrap();
        assert_eq!(iv.start, ist_at(sunday(), 9, 0));
        assert_eq!(iv.end, ist_at(sunday(), 11, 0));
    }

    #[test]
    fn preferred_range_outside_daylight_is_empty() {
        let p = LinearProvider::ist();
        let ctx = DayContext::load(&p, sunday(), delhi(), ist()).unwrap();
        let params = SearchParams {
            preferred_time: Some(TimeOfDayRange::new(
                NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            )),
            ..one_day(ActivityType::Travel)
        };
        assert_eq!(scan_interval(&ctx, &params).unwrap(), None);
    }

    #[test]
    fn windows_inside_preferred_range() {
        let params = SearchParams {
            threshold: 0,
            avoid_inauspicious_periods: false,
            preferred_time: Some(TimeOfDayRange::new(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            )),
            ..one_day(ActivityType::Business)
        };
        let r = engine().find_optimal_windows(&params).unwrap();
        assert_eq!(r.windows.len(), 1);
        assert_eq!(r.windows[0].start, ist_at(sunday(), 9, 0));
        assert_eq!(r.windows[0].end, ist_at(sunday(), 10, 0));
    }

    #[test]
    fn wrapping_preferred_range_filters_instants() {
        // 22:00-02:00 over a full local day keeps 00:00-02:00 and 22:00-23:59
        let params = SearchParams {
            threshold: 0,
            avoid_inauspicious_periods: false,
            require_daylight: false,
            preferred_time: Some(TimeOfDayRange::new(
                NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
            )),
            ..one_day(ActivityType::Travel)
        };
        let r = engine().find_optimal_windows(&params).unwrap();
        let mut spans: Vec<_> = r.windows.iter().map(|w| (w.start, w.end)).collect();
        spans.sort();
        assert_eq!(
            spans,
            vec![
                (ist_at(sunday(), 0, 0), ist_at(sunday(), 2, 0)),
                (ist_at(sunday(), 22, 0), ist_at(sunday(), 23, 59)),
            ]
        );
    }

    #[test]
    fn ranks_are_contiguous() {
        let params = SearchParams {
            threshold: 0,
            ..one_day(ActivityType::Marriage)
        };
        let r = engine().find_optimal_windows(&params).unwrap();
        assert!(!r.windows.is_empty());
        for (i, w) in r.windows.iter().enumerate() {
            assert_eq!(w.rank, i + 1);
        }
        assert_eq!(r.best_window.as_ref(), r.windows.first());
    }

    #[test]
    fn best_muhurta_is_rank_one() {
        let params = SearchParams {
            threshold: 0,
            ..one_day(ActivityType::Marriage)
        };
        let e = engine();
        let best = e.find_best_muhurta(&params).unwrap().unwrap();
        let all = e.find_optimal_windows(&params).unwrap();
        assert_eq!(best.rank, 1);
        assert_eq!(best.start, all.windows[0].start);
        assert_eq!(best.score, all.windows[0].score);
    }

    #[test]
    fn on_date_uses_day_cap() {
        let r = engine()
            .find_muhurtas_on_date(sunday(), ActivityType::Travel, delhi(), ist(), Some(0))
            .unwrap();
        assert_eq!(r.params.max_results, DAY_MAX_RESULTS);
        assert_eq!(r.params.threshold, 0);
        assert!(r.windows.len() <= DAY_MAX_RESULTS);
    }

    #[test]
    fn invalid_params_fail_before_scan() {
        let params = SearchParams {
            end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ..one_day(ActivityType::Marriage)
        };
        assert!(matches!(
            engine().find_optimal_windows(&params),
            Err(SearchError::InvalidSearchParams(_))
        ));
    }
}
