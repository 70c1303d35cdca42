//! Sunrise-based partitions of the Vedic day.
//!
//! A Vedic day runs from one sunrise to the next and takes its vara from the
//! civil date of the opening sunrise. Given the three bracketing instants it
//! is split into:
//! - 12 day + 12 night horas ruled in Chaldean order from the day lord
//! - 8 day + 8 night choghadiyas named from the weekday tables
//! - Rahukala, Yamaghanta and Gulikakala: one eighth of daylight each
//! - 1 or 2 Durmuhurtas and the Abhijit Muhurta from fifteen daylight parts
//!
//! Everything here is pure arithmetic over instants; the provider lookups
//! that produce the sunrises live in `muhurta_search`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::choghadiya::{CHOGHADIYAS_PER_HALF, Choghadiya, day_sequence, night_sequence};
use crate::error::MuhurtaError;
use crate::graha::{Graha, HoraNature, chaldean_successor};
use crate::time_period::TimePeriod;
use crate::vara::Vara;

/// Horas from sunrise to sunset.
pub const DAY_HORAS: u32 = 12;
/// Horas from sunset to next sunrise.
pub const NIGHT_HORAS: u32 = 12;
/// Equal divisions of daylight for Rahukala, Yamaghanta and Gulikakala.
pub const KALA_SLOTS: u32 = 8;
/// Equal divisions of daylight for Durmuhurta and Abhijit.
pub const DAY_MUHURTAS: u32 = 15;
/// Abhijit is the 8th daylight muhurta.
pub const ABHIJIT_SLOT: u32 = 8;

// ---------------------------------------------------------------------------
// Weekday slot tables (Sunday first, 1-based slots)
// ---------------------------------------------------------------------------

const RAHUKALA_SLOTS: [u32; 7] = [8, 2, 7, 5, 6, 4, 3];
const YAMAGHANTA_SLOTS: [u32; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKAKALA_SLOTS: [u32; 7] = [7, 6, 5, 4, 3, 2, 1];
const DURMUHURTA_SLOTS: [&[u32]; 7] = [&[14], &[10, 14], &[4, 11], &[8, 13], &[7, 12], &[6, 11], &[1, 2]];

/// 1-based eighth of daylight occupied by Rahukala on `vara`.
pub const fn rahukala_slot(vara: Vara) -> u32 {
    RAHUKALA_SLOTS[vara.index() as usize]
}

/// 1-based eighth of daylight occupied by Yamaghanta on `vara`.
pub const fn yamaghanta_slot(vara: Vara) -> u32 {
    YAMAGHANTA_SLOTS[vara.index() as usize]
}

/// 1-based eighth of daylight occupied by Gulikakala on `vara`.
pub const fn gulikakala_slot(vara: Vara) -> u32 {
    GULIKAKALA_SLOTS[vara.index() as usize]
}

/// 1-based fifteenths of daylight occupied by Durmuhurta on `vara`.
pub const fn durmuhurta_slots(vara: Vara) -> &'static [u32] {
    DURMUHURTA_SLOTS[vara.index() as usize]
}

fn daylight_period(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<TimePeriod, MuhurtaError> {
    if sunset <= sunrise {
        return Err(MuhurtaError::DegenerateDaylight { sunrise, sunset });
    }
    TimePeriod::new(sunrise, sunset)
}

fn night_period(
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
) -> Result<TimePeriod, MuhurtaError> {
    if next_sunrise <= sunset {
        return Err(MuhurtaError::DegenerateNight {
            sunset,
            next_sunrise,
        });
    }
    TimePeriod::new(sunset, next_sunrise)
}

// ---------------------------------------------------------------------------
// Solar day
// ---------------------------------------------------------------------------

/// One Vedic day: sunrise of `date` to sunrise of the following date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarDay {
    /// Civil date of the opening sunrise.
    pub date: NaiveDate,
    /// Weekday of `date`.
    pub vara: Vara,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

impl SolarDay {
    /// Validate the three bracketing instants.
    ///
    /// Fails with [`MuhurtaError::DegenerateDaylight`] unless
    /// `sunrise < sunset`, and with [`MuhurtaError::DegenerateNight`] unless
    /// `sunset < next_sunrise`.
    pub fn new(
        date: NaiveDate,
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    ) -> Result<Self, MuhurtaError> {
        daylight_period(sunrise, sunset)?;
        night_period(sunset, next_sunrise)?;
        Ok(Self {
            date,
            vara: Vara::from_date(date),
            sunrise,
            sunset,
            next_sunrise,
        })
    }

    /// `[sunrise, sunset)`.
    pub fn daylight(&self) -> TimePeriod {
        TimePeriod {
            start: self.sunrise,
            end: self.sunset,
        }
    }

    /// `[sunset, next_sunrise)`.
    pub fn night(&self) -> TimePeriod {
        TimePeriod {
            start: self.sunset,
            end: self.next_sunrise,
        }
    }

    /// `[sunrise, next_sunrise)`.
    pub fn span(&self) -> TimePeriod {
        TimePeriod {
            start: self.sunrise,
            end: self.next_sunrise,
        }
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.span().contains(t)
    }

    /// True when `t` falls in this day's daylight.
    pub fn is_day(&self, t: DateTime<Utc>) -> bool {
        self.daylight().contains(t)
    }
}

// ---------------------------------------------------------------------------
// Hora
// ---------------------------------------------------------------------------

/// One planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hora {
    /// Ruling graha.
    pub lord: Graha,
    /// 1-based position from sunrise (1..=24).
    pub number: u8,
    /// True for the 12 daylight horas.
    pub is_day: bool,
    pub period: TimePeriod,
}

impl Hora {
    pub const fn nature(&self) -> HoraNature {
        self.lord.hora_nature()
    }
}

/// All 24 horas of `day`, tiling `[sunrise, next_sunrise)` without gaps.
///
/// The first hora belongs to the day lord; each following one to the next
/// graha in Chaldean order.
pub fn hora_sequence(day: &SolarDay) -> Result<Vec<Hora>, MuhurtaError> {
    let day_parts = daylight_period(day.sunrise, day.sunset)?.split(DAY_HORAS)?;
    let night_parts = night_period(day.sunset, day.next_sunrise)?.split(NIGHT_HORAS)?;
    let lord = day.vara.lord();

    let horas = day_parts
        .into_iter()
        .map(|p| (true, p))
        .chain(night_parts.into_iter().map(|p| (false, p)))
        .enumerate()
        .map(|(i, (is_day, period))| Hora {
            lord: chaldean_successor(lord, i),
            number: (i + 1) as u8,
            is_day,
            period,
        })
        .collect();
    Ok(horas)
}

/// The hora of `day` containing `t`.
pub fn hora_at(day: &SolarDay, t: DateTime<Utc>) -> Result<Hora, MuhurtaError> {
    if !day.contains(t) {
        return Err(MuhurtaError::InvalidInput("instant outside the solar day"));
    }
    hora_sequence(day)?
        .into_iter()
        .find(|h| h.period.contains(t))
        .ok_or(MuhurtaError::InvalidInput("instant outside the solar day"))
}

// ---------------------------------------------------------------------------
// Choghadiya
// ---------------------------------------------------------------------------

/// One choghadiya segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoghadiyaSlot {
    pub choghadiya: Choghadiya,
    /// 1-based position within its half (1..=8).
    pub number: u8,
    /// True for daylight slots.
    pub is_day: bool,
    pub period: TimePeriod,
}

fn choghadiya_slots(
    names: &[Choghadiya; CHOGHADIYAS_PER_HALF],
    span: TimePeriod,
    is_day: bool,
) -> Result<Vec<ChoghadiyaSlot>, MuhurtaError> {
    let parts = span.split(CHOGHADIYAS_PER_HALF as u32)?;
    Ok(names
        .iter()
        .zip(parts)
        .enumerate()
        .map(|(i, (&choghadiya, period))| ChoghadiyaSlot {
            choghadiya,
            number: (i + 1) as u8,
            is_day,
            period,
        })
        .collect())
}

/// The 8 day choghadiyas from `sunrise` to `sunset`.
pub fn day_choghadiya(
    vara: Vara,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<Vec<ChoghadiyaSlot>, MuhurtaError> {
    choghadiya_slots(day_sequence(vara), daylight_period(sunrise, sunset)?, true)
}

/// The 8 night choghadiyas from `sunset` to `next_sunrise`.
///
/// The span is absolute, so a night crossing local midnight needs no special
/// handling.
pub fn night_choghadiya(
    vara: Vara,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
) -> Result<Vec<ChoghadiyaSlot>, MuhurtaError> {
    choghadiya_slots(
        night_sequence(vara),
        night_period(sunset, next_sunrise)?,
        false,
    )
}

/// The choghadiya of `day` containing `t`.
pub fn choghadiya_at(day: &SolarDay, t: DateTime<Utc>) -> Result<ChoghadiyaSlot, MuhurtaError> {
    let slots = if day.is_day(t) {
        day_choghadiya(day.vara, day.sunrise, day.sunset)?
    } else if day.night().contains(t) {
        night_choghadiya(day.vara, day.sunset, day.next_sunrise)?
    } else {
        return Err(MuhurtaError::InvalidInput("instant outside the solar day"));
    };
    slots
        .into_iter()
        .find(|s| s.period.contains(t))
        .ok_or(MuhurtaError::InvalidInput("instant outside the solar day"))
}

// ---------------------------------------------------------------------------
// Inauspicious periods and Abhijit
// ---------------------------------------------------------------------------

/// Kind of inauspicious daylight period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InauspiciousKind {
    Rahukala,
    Yamaghanta,
    Gulikakala,
    Durmuhurta,
}

impl InauspiciousKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahukala => "Rahukala",
            Self::Yamaghanta => "Yamaghanta",
            Self::Gulikakala => "Gulika Kala",
            Self::Durmuhurta => "Durmuhurta",
        }
    }
}

/// The inauspicious periods of one daylight span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InauspiciousPeriods {
    pub rahukala: TimePeriod,
    pub yamaghanta: TimePeriod,
    pub gulikakala: TimePeriod,
    /// One or two slots depending on the weekday.
    pub durmuhurtas: Vec<TimePeriod>,
}

impl InauspiciousPeriods {
    /// Kinds active at `t`, in fixed order. Durmuhurta appears at most once.
    pub fn active_at(&self, t: DateTime<Utc>) -> Vec<InauspiciousKind> {
        let mut kinds = Vec::new();
        if self.rahukala.contains(t) {
            kinds.push(InauspiciousKind::Rahukala);
        }
        if self.yamaghanta.contains(t) {
            kinds.push(InauspiciousKind::Yamaghanta);
        }
        if self.gulikakala.contains(t) {
            kinds.push(InauspiciousKind::Gulikakala);
        }
        if self.durmuhurtas.iter().any(|p| p.contains(t)) {
            kinds.push(InauspiciousKind::Durmuhurta);
        }
        kinds
    }

    /// True when any period contains `t`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.periods().any(|(_, p)| p.contains(t))
    }

    /// True when any period has an instant in `(after, until]`.
    pub fn any_between(&self, after: DateTime<Utc>, until: DateTime<Utc>) -> bool {
        after < until
            && self
                .periods()
                .any(|(_, p)| p.start <= until && p.end > after)
    }

    /// Every period tagged with its kind.
    pub fn periods(&self) -> impl Iterator<Item = (InauspiciousKind, TimePeriod)> + '_ {
        [
            (InauspiciousKind::Rahukala, self.rahukala),
            (InauspiciousKind::Yamaghanta, self.yamaghanta),
            (InauspiciousKind::Gulikakala, self.gulikakala),
        ]
        .into_iter()
        .chain(
            self.durmuhurtas
                .iter()
                .map(|p| (InauspiciousKind::Durmuhurta, *p)),
        )
    }
}

/// Rahukala, Yamaghanta, Gulikakala and Durmuhurta for `vara`.
pub fn inauspicious_periods(
    vara: Vara,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<InauspiciousPeriods, MuhurtaError> {
    let daylight = daylight_period(sunrise, sunset)?;
    let eighths = daylight.split(KALA_SLOTS)?;
    let fifteenths = daylight.split(DAY_MUHURTAS)?;
    let eighth = |slot: u32| eighths[(slot - 1) as usize];

    Ok(InauspiciousPeriods {
        rahukala: eighth(rahukala_slot(vara)),
        yamaghanta: eighth(yamaghanta_slot(vara)),
        gulikakala: eighth(gulikakala_slot(vara)),
        durmuhurtas: durmuhurta_slots(vara)
            .iter()
            .map(|&slot| fifteenths[(slot - 1) as usize])
            .collect(),
    })
}

/// Abhijit Muhurta: the 8th of 15 daylight divisions, centred on local noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbhijitMuhurta {
    pub period: TimePeriod,
}

impl AbhijitMuhurta {
    pub fn is_active(&self, t: DateTime<Utc>) -> bool {
        self.period.contains(t)
    }
}

pub fn abhijit_muhurta(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<AbhijitMuhurta, MuhurtaError> {
    let period = daylight_period(sunrise, sunset)?.slot(DAY_MUHURTAS, ABHIJIT_SLOT)?;
    Ok(AbhijitMuhurta { period })
}
