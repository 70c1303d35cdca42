//! The provider contract consumed by the muhurta core.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::location::GeoLocation;

/// Sunrise and sunset instants of one civil date at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self { sunrise, sunset }
    }

    /// Length of daylight; negative or zero when degenerate.
    pub fn daylight(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }

    /// True when sunset is not strictly after sunrise.
    pub fn is_degenerate(&self) -> bool {
        self.sunset <= self.sunrise
    }
}

/// Source of sidereal longitudes and sunrise/sunset instants.
///
/// Implementations must be internally consistent (one precession model)
/// and deterministic. Callers must check [`SunTimes::is_degenerate`]
/// before partitioning daylight.
pub trait PositionProvider: Send + Sync {
    /// Short backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Sidereal ecliptic longitude of `body` at `instant`, degrees in [0, 360).
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Sunrise and sunset of the civil `date` at `location`.
    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).longitude(body, instant)
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError> {
        (**self).sunrise_sunset(date, location)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).longitude(body, instant)
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError> {
        (**self).sunrise_sunset(date, location)
    }
}
