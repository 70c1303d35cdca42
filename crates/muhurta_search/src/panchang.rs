//! Daily panchanga, day partitions and limb end times.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use muhurta_base::{
    ChoghadiyaSlot, DayFrame, Hora, Panchaka, Panchanga, SpecialYoga, TimePeriod, Tithi, Vara,
    Yoga, day_choghadiya, detect_panchaka, detect_special_yogas, hora_sequence,
    karana_from_longitudes, nakshatra_from_longitude, night_choghadiya,
};
use muhurta_ephem::{GeoLocation, PositionProvider};
use tracing::debug;

use crate::boundary::{BoundaryConfig, BoundaryFinder};
use crate::context::{solar_day, sun_moon};
use crate::error::SearchError;

/// Panchanga of one civil date, classified at sunrise.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPanchanga {
    pub date: NaiveDate,
    pub utc_offset: FixedOffset,
    pub vara: Vara,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Limbs in force at sunrise.
    pub panchanga: Panchanga,
    /// End of the sunrise tithi; `None` if no change within the horizon.
    pub tithi_end: Option<DateTime<Utc>>,
    pub nakshatra_end: Option<DateTime<Utc>>,
    pub yoga_end: Option<DateTime<Utc>>,
    pub karana_end: Option<DateTime<Utc>>,
    pub rahukala: TimePeriod,
    pub yamaghanta: TimePeriod,
    pub gulikakala: TimePeriod,
    pub durmuhurtas: Vec<TimePeriod>,
    pub abhijit: TimePeriod,
    pub special_yogas: Vec<SpecialYoga>,
    /// Panchaka dosha at sunrise.
    pub panchaka: Option<Panchaka>,
}

// ---------------------------------------------------------------------------
// Limb end times
// ---------------------------------------------------------------------------

fn limb_end<K, F>(
    provider: &impl PositionProvider,
    start: DateTime<Utc>,
    config: &BoundaryConfig,
    limb: F,
) -> Result<DateTime<Utc>, SearchError>
where
    K: PartialEq,
    F: Fn(f64, f64) -> K,
{
    BoundaryFinder::new(*config)?.find(start, |t| {
        let (sun, moon) = sun_moon(provider, t)?;
        Ok(limb(sun, moon))
    })
}

/// First instant after `start` at which the tithi changes.
pub fn tithi_end<P: PositionProvider>(
    provider: &P,
    start: DateTime<Utc>,
    config: &BoundaryConfig,
) -> Result<DateTime<Utc>, SearchError> {
    limb_end(provider, start, config, Tithi::from_longitudes)
}

/// First instant after `start` at which the Moon's nakshatra changes.
pub fn nakshatra_end<P: PositionProvider>(
    provider: &P,
    start: DateTime<Utc>,
    config: &BoundaryConfig,
) -> Result<DateTime<Utc>, SearchError> {
    limb_end(provider, start, config, |_, moon| {
        nakshatra_from_longitude(moon).nakshatra
    })
}

pub fn yoga_end<P: PositionProvider>(
    provider: &P,
    start: DateTime<Utc>,
    config: &BoundaryConfig,
) -> Result<DateTime<Utc>, SearchError> {
    limb_end(provider, start, config, Yoga::from_longitudes)
}

pub fn karana_end<P: PositionProvider>(
    provider: &P,
    start: DateTime<Utc>,
    config: &BoundaryConfig,
) -> Result<DateTime<Utc>, SearchError> {
    limb_end(provider, start, config, |sun, moon| {
        karana_from_longitudes(sun, moon).number
    })
}

/// `BoundaryNotFound` becomes `None`; anything else still fails.
fn optional_end(
    limb: &'static str,
    r: Result<DateTime<Utc>, SearchError>,
) -> Result<Option<DateTime<Utc>>, SearchError> {
    match r {
        Ok(t) => Ok(Some(t)),
        Err(SearchError::BoundaryNotFound { horizon_minutes }) => {
            debug!(limb, horizon_minutes, "end time unknown");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Daily views
// ---------------------------------------------------------------------------

/// Panchanga, partitions and special yogas of `date` at `location`.
pub fn panchanga_for_date<P: PositionProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    utc_offset: FixedOffset,
    boundary: &BoundaryConfig,
) -> Result<DailyPanchanga, SearchError> {
    location.validate()?;
    let day = solar_day(provider, date, location)?;
    let (sun, moon) = sun_moon(provider, day.sunrise)?;
    let panchanga = Panchanga::with_vara(day.vara, sun, moon);
    let DayFrame {
        inauspicious: periods,
        abhijit,
        ..
    } = DayFrame::new(day).map_err(|e| SearchError::for_date(date, e))?;

    debug!(%date, tithi = %panchanga.tithi, nakshatra = %panchanga.nakshatra.nakshatra, "daily panchanga");

    Ok(DailyPanchanga {
        date,
        utc_offset,
        vara: day.vara,
        sunrise: day.sunrise,
        sunset: day.sunset,
        panchanga,
        tithi_end: optional_end("tithi", tithi_end(provider, day.sunrise, boundary))?,
        nakshatra_end: optional_end("nakshatra", nakshatra_end(provider, day.sunrise, boundary))?,
        yoga_end: optional_end("yoga", yoga_end(provider, day.sunrise, boundary))?,
        karana_end: optional_end("karana", karana_end(provider, day.sunrise, boundary))?,
        rahukala: periods.rahukala,
        yamaghanta: periods.yamaghanta,
        gulikakala: periods.gulikakala,
        durmuhurtas: periods.durmuhurtas,
        abhijit: abhijit.period,
        special_yogas: detect_special_yogas(
            day.vara,
            panchanga.tithi,
            panchanga.nakshatra.nakshatra,
        ),
        panchaka: detect_panchaka(day.vara, panchanga.tithi, &panchanga.nakshatra),
    })
}

/// Day and night choghadiyas of `date`: 8 from sunrise, 8 from sunset.
pub fn daily_choghadiya<P: PositionProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
) -> Result<(Vec<ChoghadiyaSlot>, Vec<ChoghadiyaSlot>), SearchError> {
    let day = solar_day(provider, date, location)?;
    let map = |e| SearchError::for_date(date, e);
    let d = day_choghadiya(day.vara, day.sunrise, day.sunset).map_err(map)?;
    let n = night_choghadiya(day.vara, day.sunset, day.next_sunrise).map_err(map)?;
    Ok((d, n))
}

/// The 24 horas from sunrise of `date` to the next sunrise.
pub fn daily_horas<P: PositionProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
) -> Result<Vec<Hora>, SearchError> {
    let day = solar_day(provider, date, location)?;
    hora_sequence(&day).map_err(|e| SearchError::for_date(date, e))
}
