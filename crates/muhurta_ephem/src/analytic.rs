//! Closed-form low-precision Sun/Moon provider.
//!
//! - Sun: mean longitude plus equation of centre, aberration and nutation
//!   shortcut (Meeus ch. 25, low-accuracy method, ~0.01 deg).
//! - Moon: mean longitude plus the thirteen largest periodic terms of the
//!   ELP-2000/82 longitude series (Meeus ch. 47, ~0.1 deg).
//! - Sidereal conversion: Lahiri reference value at J2000.0 plus general
//!   precession in longitude.
//! - Sunrise/sunset: hour-angle iteration on the Sun's declination with a
//!   50' horizon depression (34' refraction + 16' semidiameter).
//!
//! Only the Sun and Moon are modelled; other bodies report
//! `PositionUnavailable`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::julian::{centuries_since_j2000, date_midnight_jd, instant_to_jd, jd_to_instant};
use crate::location::GeoLocation;
use crate::provider::{PositionProvider, SunTimes};

/// Lahiri ayanamsha at J2000.0 in degrees.
const LAHIRI_J2000_DEG: f64 = 23.853;

/// Horizon depression for sunrise/sunset: (34' + 16') / 60.
const SUNRISE_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Sidereal rotation rate in degrees per solar day.
const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Supported Julian Date range (1800-01-01 .. 2200-01-01).
const MIN_JD: f64 = 2_378_496.5;
const MAX_JD: f64 = 2_524_593.5;

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Sine of an angle in degrees.
fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Lahiri ayanamsha at a Julian Date.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    // IAU 2006 general precession in longitude, arcseconds
    let p_a = 5028.796_195 * t + 1.105_434_8 * t * t;
    LAHIRI_J2000_DEG + p_a / 3600.0
}

/// Apparent tropical longitude of the Sun in degrees [0, 360).
pub fn sun_tropical_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sind(m)
        + (0.019_993 - 0.000_101 * t) * sind(2.0 * m)
        + 0.000_289 * sind(3.0 * m);
    let omega = 125.04 - 1934.136 * t;
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * sind(omega))
}

/// Geocentric tropical longitude of the Moon in degrees [0, 360).
pub fn moon_tropical_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let l = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = 297.850_192_1 + 445_267.111_403_4 * t;
    let m = 357.529_109_2 + 35_999.050_290_9 * t;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t;
    let f = 93.272_095_0 + 483_202.017_523_3 * t;

    let sum = 6.288_774 * sind(mp)
        + 1.274_027 * sind(2.0 * d - mp)
        + 0.658_314 * sind(2.0 * d)
        + 0.213_618 * sind(2.0 * mp)
        - 0.185_116 * sind(m)
        - 0.114_332 * sind(2.0 * f)
        + 0.058_793 * sind(2.0 * d - 2.0 * mp)
        + 0.057_066 * sind(2.0 * d - m - mp)
        + 0.053_322 * sind(2.0 * d + mp)
        + 0.045_758 * sind(2.0 * d - m)
        - 0.040_923 * sind(m - mp)
        - 0.034_720 * sind(d)
        - 0.030_383 * sind(m + mp);

    normalize_360(l + sum)
}

/// Sun's geocentric right ascension and declination in degrees.
fn sun_ra_dec_deg(jd: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jd);
    let lambda = sun_tropical_longitude_deg(jd).to_radians();
    let eps = (23.439_291 - 0.013_004_2 * t).to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (normalize_360(ra.to_degrees()), dec.to_degrees())
}

/// Greenwich mean sidereal time in degrees (Meeus eq. 12.4).
fn gmst_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    normalize_360(
        280.460_618_37 + SIDEREAL_RATE_DEG_PER_DAY * (jd - crate::julian::J2000_JD)
            + 0.000_387_933 * t * t,
    )
}

/// Wrap an angle in degrees to [-180, 180).
fn wrap_180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Outcome of a single rise or set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RiseSet {
    Event(f64),
    NeverRises,
    NeverSets,
}

/// Julian Date of sunrise (`rising`) or sunset near `jd_noon`.
fn rise_or_set_jd(location: &GeoLocation, jd_noon: f64, rising: bool) -> RiseSet {
    let phi = location.latitude_rad();
    let h0 = (-SUNRISE_DEPRESSION_DEG).to_radians();

    let mut jd_event = jd_noon;
    for iteration in 0..MAX_ITERATIONS {
        let (ra, dec) = sun_ra_dec_deg(jd_event);
        let dec = dec.to_radians();
        let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h > 1.0 {
            return RiseSet::NeverRises;
        }
        if cos_h < -1.0 {
            return RiseSet::NeverSets;
        }
        let h_target = cos_h.acos().to_degrees();
        let ha_target = if rising { -h_target } else { h_target };

        let lst = gmst_deg(jd_event) + location.longitude_deg;
        let ha_actual = wrap_180(lst - ra);
        let correction = wrap_180(ha_target - ha_actual) / SIDEREAL_RATE_DEG_PER_DAY;
        jd_event += correction;

        if iteration > 0 && correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    RiseSet::Event(jd_event)
}

/// Closed-form Sun/Moon provider with Lahiri sidereal longitudes.
///
/// Stateless; safe to share across threads. Dates outside 1800..2200 are
/// reported as unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_range(body: Body, jd: f64) -> Result<(), EphemerisError> {
        if !(MIN_JD..MAX_JD).contains(&jd) {
            return Err(EphemerisError::unavailable(
                body.name(),
                "epoch outside supported range 1800-2200",
            ));
        }
        Ok(())
    }
}

impl PositionProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = instant_to_jd(&instant);
        Self::check_range(body, jd)?;
        let tropical = match body {
            Body::Sun => sun_tropical_longitude_deg(jd),
            Body::Moon => moon_tropical_longitude_deg(jd),
            _ => {
                return Err(EphemerisError::unavailable(
                    body.name(),
                    "analytic provider models only the Sun and Moon",
                ));
            }
        };
        Ok(normalize_360(tropical - lahiri_ayanamsha_deg(jd)))
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError> {
        location.validate()?;
        let jd_midnight = date_midnight_jd(date);
        Self::check_range(Body::Sun, jd_midnight)?;
        // Approximate local noon in UT.
        let jd_noon = jd_midnight + 0.5 - location.longitude_deg / 360.0;

        let event = |rising: bool| -> Result<f64, EphemerisError> {
            match rise_or_set_jd(location, jd_noon, rising) {
                RiseSet::Event(jd) => Ok(jd),
                RiseSet::NeverRises => {
                    Err(EphemerisError::unavailable("Sun", "sun never rises on this date"))
                }
                RiseSet::NeverSets => {
                    Err(EphemerisError::unavailable("Sun", "sun never sets on this date"))
                }
            }
        };
        let rise = event(true)?;
        let set = event(false)?;

        let to_instant = |jd: f64| {
            jd_to_instant(jd).ok_or(EphemerisError::unavailable(
                "Sun",
                "event outside representable time range",
            ))
        };
        Ok(SunTimes::new(to_instant(rise)?, to_instant(set)?))
    }
}
