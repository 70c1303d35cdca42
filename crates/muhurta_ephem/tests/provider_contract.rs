//! Contract tests for the analytic provider and the caching wrapper.
//!
//! Pure-math tests (no data files needed).

use std::sync::Arc;

use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use muhurta_ephem::{
    ALL_BODIES, AnalyticEphemeris, Body, CachedProvider, EphemerisError, GeoLocation,
    PositionProvider,
};
use proptest::prelude::*;

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 216.0)
}

// ---------------------------------------------------------------------------
// Longitudes
// ---------------------------------------------------------------------------

#[test]
fn sun_and_moon_available_others_not() {
    let p = AnalyticEphemeris::new();
    let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    for body in ALL_BODIES {
        let res = p.longitude(body, t);
        match body {
            Body::Sun | Body::Moon => assert!(res.is_ok(), "{body} should be available"),
            _ => assert!(
                matches!(res, Err(EphemerisError::PositionUnavailable { .. })),
                "{body} should be unavailable"
            ),
        }
    }
}

#[test]
fn sun_advances_about_one_degree_per_day() {
    let p = AnalyticEphemeris::new();
    let t0 = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
    let a = p.longitude(Body::Sun, t0).unwrap();
    let b = p.longitude(Body::Sun, t0 + TimeDelta::days(1)).unwrap();
    let motion = (b - a).rem_euclid(360.0);
    assert!((0.95..1.03).contains(&motion), "sun motion = {motion}");
}

#[test]
fn full_moon_2024_04_23_elongation_near_180() {
    // Full moon 2024-04-23 23:49 UTC
    let p = AnalyticEphemeris::new();
    let t = Utc.with_ymd_and_hms(2024, 4, 23, 23, 49, 0).unwrap();
    let sun = p.longitude(Body::Sun, t).unwrap();
    let moon = p.longitude(Body::Moon, t).unwrap();
    let elong = (moon - sun).rem_euclid(360.0);
    assert!((elong - 180.0).abs() < 1.0, "elongation = {elong}");
}

#[test]
fn new_moon_2024_04_08_elongation_near_zero() {
    // Total solar eclipse new moon 2024-04-08 18:21 UTC
    let p = AnalyticEphemeris::new();
    let t = Utc.with_ymd_and_hms(2024, 4, 8, 18, 21, 0).unwrap();
    let sun = p.longitude(Body::Sun, t).unwrap();
    let moon = p.longitude(Body::Moon, t).unwrap();
    let elong = (moon - sun).rem_euclid(360.0);
    let dist = elong.min(360.0 - elong);
    assert!(dist < 1.0, "elongation = {elong}");
}

// ---------------------------------------------------------------------------
// Sunrise / sunset
// ---------------------------------------------------------------------------

#[test]
fn sunrise_before_sunset_across_a_year() {
    let p = AnalyticEphemeris::new();
    let loc = delhi();
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for _ in 0..366 {
        let st = p.sunrise_sunset(date, &loc).unwrap();
        assert!(!st.is_degenerate(), "{date}: {st:?}");
        let hours = st.daylight().num_minutes() as f64 / 60.0;
        assert!((10.0..14.2).contains(&hours), "{date}: daylight {hours} h");
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn summer_days_longer_than_winter_days() {
    let p = AnalyticEphemeris::new();
    let loc = delhi();
    let june = p
        .sunrise_sunset(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), &loc)
        .unwrap();
    let dec = p
        .sunrise_sunset(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(), &loc)
        .unwrap();
    assert!(june.daylight() > dec.daylight() + TimeDelta::hours(3));
}

#[test]
fn midnight_sun_unavailable() {
    let p = AnalyticEphemeris::new();
    let tromso = GeoLocation::new(69.65, 18.96, 0.0);
    let res = p.sunrise_sunset(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), &tromso);
    assert!(matches!(res, Err(EphemerisError::PositionUnavailable { .. })));
}

// ---------------------------------------------------------------------------
// Caching wrapper
// ---------------------------------------------------------------------------

#[test]
fn cached_matches_uncached() {
    let raw = AnalyticEphemeris::new();
    let cached = CachedProvider::new(AnalyticEphemeris::new());
    let t = Utc.with_ymd_and_hms(2025, 2, 14, 5, 30, 0).unwrap();
    for body in [Body::Sun, Body::Moon] {
        assert_eq!(raw.longitude(body, t), cached.longitude(body, t));
        assert_eq!(raw.longitude(body, t), cached.longitude(body, t));
    }
    let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
    assert_eq!(
        raw.sunrise_sunset(date, &delhi()),
        cached.sunrise_sunset(date, &delhi())
    );
    assert_eq!(cached.stats().hits, 2);
    assert_eq!(cached.stats().misses, 3);
}

#[test]
fn shared_cache_across_threads() {
    let cached = Arc::new(CachedProvider::new(AnalyticEphemeris::new()));
    let t = Utc.with_ymd_and_hms(2025, 2, 14, 5, 30, 0).unwrap();
    let expected = cached.longitude(Body::Moon, t).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = Arc::clone(&cached);
            std::thread::spawn(move || p.longitude(Body::Moon, t).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    assert_eq!(cached.stats().hits, 4);
}

#[test]
fn trait_objects_work() {
    let p: Arc<dyn PositionProvider> = Arc::new(AnalyticEphemeris::new());
    assert_eq!(p.name(), "analytic");
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert!(p.longitude(Body::Sun, t).is_ok());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn longitudes_in_range(secs in 0i64..4_000_000_000i64) {
        let p = AnalyticEphemeris::new();
        let t = Utc.timestamp_opt(secs, 0).unwrap();
        for body in [Body::Sun, Body::Moon] {
            let lon = p.longitude(body, t).unwrap();
            prop_assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn sunrise_sunset_bracket_local_noon(day in 0i64..3650, lat in -60.0f64..60.0, lon in -179.0f64..179.0) {
        let p = AnalyticEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + TimeDelta::days(day);
        let loc = GeoLocation::new(lat, lon, 0.0);
        let st = p.sunrise_sunset(date, &loc).unwrap();
        prop_assert!(st.sunset > st.sunrise);
        // Events lie within half a day of local noon.
        let noon = date.and_hms_opt(12, 0, 0).unwrap().and_utc()
            - TimeDelta::seconds((lon / 360.0 * 86_400.0) as i64);
        prop_assert!((st.sunrise - noon).num_hours().abs() <= 12);
        prop_assert!((st.sunset - noon).num_hours().abs() <= 12);
    }
}
