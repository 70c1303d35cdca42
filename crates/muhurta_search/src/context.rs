//! Provider-backed solar days and single-instant snapshots.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use muhurta_base::{DayFrame, MuhurtaFactors, MuhurtaSnapshot, SolarDay};
use muhurta_ephem::{Body, GeoLocation, PositionProvider};

use crate::error::SearchError;

/// Sidereal Sun and Moon longitudes at `instant`.
pub fn sun_moon<P: PositionProvider>(
    provider: &P,
    instant: DateTime<Utc>,
) -> Result<(f64, f64), SearchError> {
    let sun = provider.longitude(Body::Sun, instant)?;
    let moon = provider.longitude(Body::Moon, instant)?;
    Ok((sun, moon))
}

/// Sunrise of `date` to sunrise of the following date at `location`.
///
/// Degenerate daylight or night is reported as
/// [`SearchError::DegenerateDaylight`] for `date`.
pub fn solar_day<P: PositionProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
) -> Result<SolarDay, SearchError> {
    let next = date
        .succ_opt()
        .ok_or(SearchError::InvalidSearchParams("date out of supported range"))?;
    let today = provider.sunrise_sunset(date, location)?;
    if today.is_degenerate() {
        return Err(SearchError::DegenerateDaylight {
            date,
            reason: format!(
                "sunset {} is not after sunrise {}",
                today.sunset, today.sunrise
            ),
        });
    }
    let tomorrow = provider.sunrise_sunset(next, location)?;
    SolarDay::new(date, today.sunrise, today.sunset, tomorrow.sunrise)
        .map_err(|e| SearchError::for_date(date, e))
}

/// Local wall-clock `time` on `date` as a UTC instant.
pub fn local_instant(
    date: NaiveDate,
    time: NaiveTime,
    utc_offset: FixedOffset,
) -> Result<DateTime<Utc>, SearchError> {
    utc_offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|t| t.with_timezone(&Utc))
        .ok_or(SearchError::InvalidSearchParams("local time not representable"))
}

/// One civil date at one place: the fixed inputs of every instant on it.
///
/// Daylight partitions are built once on load. The previous date's solar
/// day is fetched on the first pre-dawn instant and reused afterwards.
#[derive(Debug, Clone)]
pub struct DayContext {
    pub location: GeoLocation,
    pub utc_offset: FixedOffset,
    /// Civil day opening at this date's sunrise, with its partitions.
    pub frame: DayFrame,
    previous: OnceLock<SolarDay>,
}

impl DayContext {
    pub fn load<P: PositionProvider>(
        provider: &P,
        date: NaiveDate,
        location: GeoLocation,
        utc_offset: FixedOffset,
    ) -> Result<Self, SearchError> {
        let civil = solar_day(provider, date, &location)?;
        let frame = DayFrame::new(civil).map_err(|e| SearchError::for_date(date, e))?;
        Ok(Self {
            location,
            utc_offset,
            frame,
            previous: OnceLock::new(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.frame.civil.date
    }

    pub fn civil(&self) -> &SolarDay {
        &self.frame.civil
    }

    /// First and last minute of the civil date, as UTC instants.
    pub fn local_span(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), SearchError> {
        let last_minute = NaiveTime::MIN + TimeDelta::minutes(23 * 60 + 59);
        Ok((
            local_instant(self.date(), NaiveTime::MIN, self.utc_offset)?,
            local_instant(self.date(), last_minute, self.utc_offset)?,
        ))
    }

    /// The sunrise-to-sunrise day containing `instant`.
    ///
    /// Before this date's sunrise that is the previous date's day.
    pub fn vedic_day<P: PositionProvider>(
        &self,
        provider: &P,
        instant: DateTime<Utc>,
    ) -> Result<SolarDay, SearchError> {
        let civil = self.civil();
        if civil.contains(instant) {
            return Ok(*civil);
        }
        if instant < civil.sunrise {
            if let Some(day) = self.previous.get() {
                return Ok(*day);
            }
            let date = civil
                .date
                .pred_opt()
                .ok_or(SearchError::InvalidSearchParams("date out of supported range"))?;
            let day = solar_day(provider, date, &self.location)?;
            return Ok(*self.previous.get_or_init(|| day));
        }
        let date = civil
            .date
            .succ_opt()
            .ok_or(SearchError::InvalidSearchParams("date out of supported range"))?;
        solar_day(provider, date, &self.location)
    }

    /// Classify `instant`, which must fall on this civil date.
    pub fn factors_at<P: PositionProvider>(
        &self,
        provider: &P,
        instant: DateTime<Utc>,
    ) -> Result<MuhurtaFactors, SearchError> {
        let vedic = self.vedic_day(provider, instant)?;
        let (sun, moon) = sun_moon(provider, instant)?;
        MuhurtaFactors::from_frame(instant, self.utc_offset, sun, moon, &self.frame, &vedic)
            .map_err(|e| SearchError::for_date(self.date(), e))
    }
}

/// Full generic evaluation of one instant at `location`.
pub fn muhurta_at<P: PositionProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    location: &GeoLocation,
    utc_offset: FixedOffset,
) -> Result<MuhurtaSnapshot, SearchError> {
    location.validate()?;
    let date = instant.with_timezone(&utc_offset).date_naive();
    let ctx = DayContext::load(provider, date, *location, utc_offset)?;
    Ok(MuhurtaSnapshot::from_factors(ctx.factors_at(provider, instant)?))
}
