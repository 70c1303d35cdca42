//! Deterministic provider shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use muhurta_base::normalize_360;
use muhurta_ephem::{Body, EphemerisError, GeoLocation, PositionProvider, SunTimes};

/// Fixed local sunrise/sunset, linear sidereal longitudes, and optional
/// injected failures.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    pub offset: FixedOffset,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    pub epoch: DateTime<Utc>,
    pub sun0: f64,
    pub moon0: f64,
    pub sun_rate: f64,
    pub moon_rate: f64,
    /// Longitudes fail for instants on this local date.
    pub fail_on: Option<NaiveDate>,
    /// Sunrise equals sunset on this date.
    pub polar_on: Option<NaiveDate>,
    /// Sunset falls on the following local date.
    pub sunset_next_day: bool,
}

impl SyntheticProvider {
    /// Sunrise 06:00, sunset 18:00 IST. At 2024-03-17 00:00 UTC (a Sunday)
    /// the Moon is in Pushya and the tithi is Shukla Ekadashi.
    pub fn new() -> Self {
        Self {
            offset: ist(),
            sunrise: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            epoch: Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap(),
            sun0: 340.0,
            moon0: 100.0,
            sun_rate: 1.0,
            moon_rate: 13.0,
            fail_on: None,
            polar_on: None,
            sunset_next_day: false,
        }
    }

    pub fn local(&self, date: NaiveDate, h: u32, m: u32) -> DateTime<Utc> {
        self.offset
            .from_local_datetime(&date.and_hms_opt(h, m, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc)
    }
}

impl PositionProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        if self.fail_on == Some(instant.with_timezone(&self.offset).date_naive()) {
            return Err(EphemerisError::unavailable(body.name(), "injected failure"));
        }
        let days = (instant - self.epoch).num_seconds() as f64 / 86_400.0;
        match body {
            Body::Sun => Ok(normalize_360(self.sun0 + self.sun_rate * days)),
            Body::Moon => Ok(normalize_360(self.moon0 + self.moon_rate * days)),
            other => Err(EphemerisError::unavailable(other.name(), "not modelled")),
        }
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError> {
        if self.polar_on == Some(date) {
            let noon = self.local(date, 12, 0);
            return Ok(SunTimes::new(noon, noon));
        }
        let at = |d: NaiveDate, t: NaiveTime| {
            self.offset
                .from_local_datetime(&d.and_time(t))
                .unwrap()
                .with_timezone(&Utc)
        };
        let sunset_date = if self.sunset_next_day {
            date.succ_opt().unwrap()
        } else {
            date
        };
        Ok(SunTimes::new(at(date, self.sunrise), at(sunset_date, self.sunset)))
    }
}

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}

pub fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 216.0)
}

/// 2024-03-17, a Sunday.
pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
}
