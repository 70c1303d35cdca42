//! Everything known about one instant, and its generic assessment.
//!
//! [`MuhurtaFactors`] gathers the panchanga, the time segments and the
//! special yogas for one instant. Two solar days feed it:
//! - the civil day: sunrise/sunset of the local calendar date, which fixes
//!   the vara, the inauspicious periods and Abhijit
//! - the Vedic day: the sunrise-to-sunrise span containing the instant,
//!   which fixes the hora and choghadiya (before dawn this is the previous
//!   date's day and night)
//!
//! The civil-day partitions are built once per date in a [`DayFrame`] and
//! shared by every instant of that date.

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};

use crate::error::MuhurtaError;
use crate::panchaka::{Panchaka, detect_panchaka};
use crate::panchanga::Panchanga;
use crate::scorer::{GeneralAssessment, evaluate};
use crate::segments::{
    AbhijitMuhurta, ChoghadiyaSlot, Hora, InauspiciousKind, InauspiciousPeriods, SolarDay,
    abhijit_muhurta, choghadiya_at, hora_at, inauspicious_periods,
};
use crate::special_yoga::{SpecialYoga, detect_special_yogas};

/// Score at or above which an instant is auspicious.
pub const AUSPICIOUS_SCORE: u8 = 60;
/// Score at or above which an instant is excellent.
pub const EXCELLENT_SCORE: u8 = 80;

/// The civil day of one date with its daylight partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFrame {
    pub civil: SolarDay,
    pub inauspicious: InauspiciousPeriods,
    pub abhijit: AbhijitMuhurta,
}

impl DayFrame {
    pub fn new(civil: SolarDay) -> Result<Self, MuhurtaError> {
        Ok(Self {
            inauspicious: inauspicious_periods(civil.vara, civil.sunrise, civil.sunset)?,
            abhijit: abhijit_muhurta(civil.sunrise, civil.sunset)?,
            civil,
        })
    }
}

/// Classification of one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaFactors {
    pub instant: DateTime<Utc>,
    /// Offset used for the civil date and local time of day.
    pub utc_offset: FixedOffset,
    pub panchanga: Panchanga,
    pub hora: Hora,
    pub choghadiya: ChoghadiyaSlot,
    /// Periods of the civil date's daylight.
    pub inauspicious: InauspiciousPeriods,
    pub abhijit: AbhijitMuhurta,
    pub special_yogas: Vec<SpecialYoga>,
    pub panchaka: Option<Panchaka>,
    /// Sunrise of the civil date.
    pub sunrise: DateTime<Utc>,
    /// Sunset of the civil date.
    pub sunset: DateTime<Utc>,
}

impl MuhurtaFactors {
    /// Classify `instant` from sidereal Sun/Moon longitudes and its two days.
    ///
    /// `civil.date` must be the local date of `instant` under `utc_offset`
    /// and `vedic` must contain `instant`; otherwise
    /// [`MuhurtaError::InvalidInput`].
    pub fn assemble(
        instant: DateTime<Utc>,
        utc_offset: FixedOffset,
        sun_deg: f64,
        moon_deg: f64,
        civil: &SolarDay,
        vedic: &SolarDay,
    ) -> Result<Self, MuhurtaError> {
        let frame = DayFrame::new(*civil)?;
        Self::from_frame(instant, utc_offset, sun_deg, moon_deg, &frame, vedic)
    }

    /// As [`MuhurtaFactors::assemble`], reusing the partitions of `frame`.
    pub fn from_frame(
        instant: DateTime<Utc>,
        utc_offset: FixedOffset,
        sun_deg: f64,
        moon_deg: f64,
        frame: &DayFrame,
        vedic: &SolarDay,
    ) -> Result<Self, MuhurtaError> {
        let civil = &frame.civil;
        let local_date = instant.with_timezone(&utc_offset).date_naive();
        if local_date != civil.date {
            return Err(MuhurtaError::InvalidInput(
                "civil day does not match the local date of the instant",
            ));
        }
        if !vedic.contains(instant) {
            return Err(MuhurtaError::InvalidInput(
                "instant outside the Vedic day",
            ));
        }

        let panchanga = Panchanga::with_vara(civil.vara, sun_deg, moon_deg);
        let special_yogas = detect_special_yogas(
            panchanga.vara,
            panchanga.tithi,
            panchanga.nakshatra.nakshatra,
        );
        let panchaka = detect_panchaka(panchanga.vara, panchanga.tithi, &panchanga.nakshatra);

        Ok(Self {
            instant,
            utc_offset,
            panchanga,
            hora: hora_at(vedic, instant)?,
            choghadiya: choghadiya_at(vedic, instant)?,
            inauspicious: frame.inauspicious.clone(),
            abhijit: frame.abhijit,
            special_yogas,
            panchaka,
            sunrise: civil.sunrise,
            sunset: civil.sunset,
        })
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.instant.with_timezone(&self.utc_offset).naive_local()
    }

    pub fn local_time(&self) -> NaiveTime {
        self.local_datetime().time()
    }

    pub fn is_abhijit_active(&self) -> bool {
        self.abhijit.is_active(self.instant)
    }

    /// Inauspicious periods containing the instant; Durmuhurta at most once.
    pub fn active_inauspicious(&self) -> Vec<InauspiciousKind> {
        self.inauspicious.active_at(self.instant)
    }

    pub fn in_inauspicious_period(&self) -> bool {
        self.inauspicious.contains(self.instant)
    }

    pub fn is_daylight(&self) -> bool {
        self.sunrise <= self.instant && self.instant < self.sunset
    }
}

/// Factors of one instant together with their generic assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaSnapshot {
    pub factors: MuhurtaFactors,
    pub assessment: GeneralAssessment,
}

impl MuhurtaSnapshot {
    pub fn from_factors(factors: MuhurtaFactors) -> Self {
        let assessment = evaluate(&factors);
        Self {
            factors,
            assessment,
        }
    }

    pub fn score(&self) -> u8 {
        self.assessment.score
    }

    pub fn is_auspicious(&self) -> bool {
        self.score() >= AUSPICIOUS_SCORE
    }

    pub fn is_excellent(&self) -> bool {
        self.score() >= EXCELLENT_SCORE
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    /// IST, as used by the fixtures.
    pub fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    /// Solar day of `date` with sunrise 06:00 and sunset 18:00 IST.
    pub fn solar_day(date: NaiveDate) -> SolarDay {
        let at = |d: NaiveDate, h: u32| {
            ist()
                .from_local_datetime(&d.and_hms_opt(h, 0, 0).unwrap())
                .unwrap()
                .with_timezone(&Utc)
        };
        let next = date.succ_opt().unwrap();
        SolarDay::new(date, at(date, 6), at(date, 18), at(next, 6)).unwrap()
    }

    /// Factors at local `h:m` on `date`, daytime only.
    pub fn factors_at(date: NaiveDate, h: u32, m: u32, sun: f64, moon: f64) -> MuhurtaFactors {
        let day = solar_day(date);
        let instant = ist()
            .from_local_datetime(&date.and_hms_opt(h, m, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);
        MuhurtaFactors::assemble(instant, ist(), sun, moon, &day, &day).unwrap()
    }
}
