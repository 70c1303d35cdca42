//! Deterministic provider for unit tests.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use muhurta_base::normalize_360;
use muhurta_ephem::{Body, EphemerisError, GeoLocation, PositionProvider, SunTimes};

/// Fixed local sunrise/sunset and linear sidereal longitudes from `epoch`.
pub struct LinearProvider {
    pub offset: FixedOffset,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    pub epoch: DateTime<Utc>,
    pub sun0: f64,
    pub moon0: f64,
    /// Degrees per day.
    pub sun_rate: f64,
    pub moon_rate: f64,
}

impl LinearProvider {
    /// 06:00/18:00 IST, Sun 0 and Moon 100 degrees at 2024-03-17 00:00 UTC.
    pub fn ist() -> Self {
        Self {
            offset: ist(),
            sunrise: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            epoch: Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap(),
            sun0: 0.0,
            moon0: 100.0,
            sun_rate: 1.0,
            moon_rate: 13.0,
        }
    }

    fn at(&self, date: NaiveDate, t: NaiveTime) -> DateTime<Utc> {
        self.offset
            .from_local_datetime(&date.and_time(t))
            .unwrap()
            .with_timezone(&Utc)
    }
}

impl PositionProvider for LinearProvider {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
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
        Ok(SunTimes::new(
            self.at(date, self.sunrise),
            self.at(date, self.sunset),
        ))
    }
}

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}

pub fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 0.0)
}

/// `h:m` local IST on `date` as a UTC instant.
pub fn ist_at(date: NaiveDate, h: u32, m: u32) -> DateTime<Utc> {
    ist()
        .from_local_datetime(&date.and_hms_opt(h, m, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
