//! Panchaka dosha: the Moon in the last five nakshatras.
//!
//! The group runs from the Aquarius half of Dhanishtha (padas 3-4) through
//! Revati. Inside it the kind of dosha is picked by
//! `(nakshatra number + weekday number + tithi number) mod 9`, with
//! nakshatra 1..=27 from Ashwini, weekday 1..=7 from Sunday and tithi
//! 1..=30. A remainder of 0 forms no dosha.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::activity::ActivityType;
use crate::nakshatra::{Nakshatra, NakshatraInfo};
use crate::tithi::Tithi;
use crate::vara::Vara;

/// Kind of Panchaka dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panchaka {
    Mrityu,
    Agni,
    Raja,
    Chora,
    Roga,
}

/// All Panchaka kinds, most severe first.
pub const ALL_PANCHAKAS: [Panchaka; 5] = [
    Panchaka::Mrityu,
    Panchaka::Agni,
    Panchaka::Chora,
    Panchaka::Raja,
    Panchaka::Roga,
];

impl Panchaka {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mrityu => "Mrityu Panchaka",
            Self::Agni => "Agni Panchaka",
            Self::Raja => "Raja Panchaka",
            Self::Chora => "Chora Panchaka",
            Self::Roga => "Roga Panchaka",
        }
    }

    /// Severity 1-5, 5 the most severe.
    pub const fn severity(self) -> u8 {
        match self {
            Self::Mrityu => 5,
            Self::Agni | Self::Chora => 4,
            Self::Raja | Self::Roga => 3,
        }
    }

    /// Kind for a remainder of the Panchaka sum; `None` for 0.
    pub const fn from_remainder(r: u8) -> Option<Self> {
        match r % 9 {
            1 | 2 => Some(Self::Mrityu),
            3 => Some(Self::Agni),
            4 | 5 => Some(Self::Raja),
            6 => Some(Self::Chora),
            7 | 8 => Some(Self::Roga),
            _ => None,
        }
    }

    /// Activities this dosha specifically harms.
    pub const fn affected_activities(self) -> &'static [ActivityType] {
        match self {
            Self::Mrityu => &[ActivityType::Travel, ActivityType::Medical],
            Self::Agni => &[ActivityType::GrihaPravesha, ActivityType::Property],
            Self::Raja => &[ActivityType::Business],
            Self::Chora => &[
                ActivityType::Business,
                ActivityType::Vehicle,
                ActivityType::Travel,
            ],
            Self::Roga => &[ActivityType::Medical],
        }
    }

    pub fn is_activity_safe(self, activity: ActivityType) -> bool {
        !self.affected_activities().contains(&activity)
    }
}

impl fmt::Display for Panchaka {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when the Moon's nakshatra and pada lie in the Panchaka group.
pub fn in_panchaka_group(nakshatra: Nakshatra, pada: u8) -> bool {
    match nakshatra {
        Nakshatra::Dhanishtha => pada >= 3,
        Nakshatra::Shatabhisha
        | Nakshatra::PurvaBhadrapada
        | Nakshatra::UttaraBhadrapada
        | Nakshatra::Revati => true,
        _ => false,
    }
}

/// `(nakshatra + weekday + tithi) mod 9`, all 1-based.
pub fn panchaka_remainder(nakshatra: Nakshatra, vara: Vara, tithi: Tithi) -> u8 {
    let n = u32::from(nakshatra.index()) + 1;
    let w = u32::from(vara.index()) + 1;
    ((n + w + u32::from(tithi.number())) % 9) as u8
}

/// The Panchaka dosha in force, if any.
pub fn detect_panchaka(vara: Vara, tithi: Tithi, nakshatra: &NakshatraInfo) -> Option<Panchaka> {
    if !in_panchaka_group(nakshatra.nakshatra, nakshatra.pada) {
        return None;
    }
    Panchaka::from_remainder(panchaka_remainder(nakshatra.nakshatra, vara, tithi))
}
