//! Julian Date conversions for `chrono` UTC instants.
//!
//! Instants are `DateTime<Utc>` everywhere in the workspace; Julian Dates
//! are only used inside providers. The difference between UTC and TT is
//! ignored, which is well below the resolution of a muhurta search.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of a UTC instant.
pub fn instant_to_jd(instant: &DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date, or `None` outside chrono's range.
pub fn jd_to_instant(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let secs = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Julian Date at 00:00 UT of a calendar date.
pub fn date_midnight_jd(date: NaiveDate) -> f64 {
    let days = date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE;
    UNIX_EPOCH_JD + f64::from(days)
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
