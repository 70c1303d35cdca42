//! Tithi (lunar day) from the Moon-Sun elongation.
//!
//! The 360 deg elongation circle is split into 30 tithis of 12 deg each.
//! Tithis 1-15 form Shukla paksha (waxing), 16-30 Krishna paksha (waning).
//!
//! Each tithi carries a fixed nature (Nanda, Bhadra, Jaya, Rikta, Purna,
//! cycling every 5) and a lord (the 9 grahas, cycling every 9).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MuhurtaError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight (tithis 1-15).
    Shukla,
    /// Waning fortnight (tithis 16-30).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Five-fold tithi nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TithiNature {
    /// Joy.
    Nanda,
    /// Auspicious.
    Bhadra,
    /// Victory.
    Jaya,
    /// Empty; avoided for finance and new work.
    Rikta,
    /// Full.
    Purna,
}

const TITHI_NATURES: [TithiNature; 5] = [
    TithiNature::Nanda,
    TithiNature::Bhadra,
    TithiNature::Jaya,
    TithiNature::Rikta,
    TithiNature::Purna,
];

impl TithiNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanda => "Nanda",
            Self::Bhadra => "Bhadra",
            Self::Jaya => "Jaya",
            Self::Rikta => "Rikta",
            Self::Purna => "Purna",
        }
    }
}

const TITHI_LORDS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Display names of the 30 tithis.
const TITHI_NAMES: [&str; 30] = [
    "Shukla Pratipada",
    "Shukla Dwitiya",
    "Shukla Tritiya",
    "Shukla Chaturthi",
    "Shukla Panchami",
    "Shukla Shashthi",
    "Shukla Saptami",
    "Shukla Ashtami",
    "Shukla Navami",
    "Shukla Dashami",
    "Shukla Ekadashi",
    "Shukla Dwadashi",
    "Shukla Trayodashi",
    "Shukla Chaturdashi",
    "Purnima",
    "Krishna Pratipada",
    "Krishna Dwitiya",
    "Krishna Tritiya",
    "Krishna Chaturthi",
    "Krishna Panchami",
    "Krishna Shashthi",
    "Krishna Saptami",
    "Krishna Ashtami",
    "Krishna Navami",
    "Krishna Dashami",
    "Krishna Ekadashi",
    "Krishna Dwadashi",
    "Krishna Trayodashi",
    "Krishna Chaturdashi",
    "Amavasya",
];

/// A tithi, numbered 1 (Shukla Pratipada) to 30 (Amavasya).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tithi(u8);

impl Tithi {
    /// Tithi from its 1-based number.
    pub fn from_number(number: u8) -> Result<Self, MuhurtaError> {
        if !(1..=30).contains(&number) {
            return Err(MuhurtaError::InvalidInput("tithi number must be 1-30"));
        }
        Ok(Self(number))
    }

    /// Tithi from Moon-Sun elongation in degrees (any range).
    pub fn from_elongation(elongation_deg: f64) -> Self {
        let e = normalize_360(elongation_deg);
        let idx = ((e / TITHI_SEGMENT_DEG).floor() as u8).min(29);
        Self(idx + 1)
    }

    /// Tithi from sidereal Sun and Moon longitudes.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> Self {
        Self::from_elongation(moon_deg - sun_deg)
    }

    /// 1-based number (1..=30).
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index (0..=29).
    pub const fn index(self) -> u8 {
        self.0 - 1
    }

    pub const fn paksha(self) -> Paksha {
        if self.0 <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Number within the paksha (1..=15).
    pub const fn display_number(self) -> u8 {
        if self.0 <= 15 { self.0 } else { self.0 - 15 }
    }

    pub const fn nature(self) -> TithiNature {
        TITHI_NATURES[((self.0 - 1) % 5) as usize]
    }

    pub const fn lord(self) -> Graha {
        TITHI_LORDS[((self.0 - 1) % 9) as usize]
    }

    /// Display name, e.g. "Shukla Panchami", "Purnima", "Amavasya".
    pub const fn name(self) -> &'static str {
        TITHI_NAMES[(self.0 - 1) as usize]
    }

    /// Rikta tithis and both Ashtamis are inauspicious.
    pub const fn is_auspicious(self) -> bool {
        !matches!(self.nature(), TithiNature::Rikta) && self.0 != 8 && self.0 != 23
    }

    /// Elongation range [start, end) in degrees covered by this tithi.
    pub fn elongation_range(self) -> (f64, f64) {
        let start = f64::from(self.index()) * TITHI_SEGMENT_DEG;
        (start, start + TITHI_SEGMENT_DEG)
    }
}

impl TryFrom<u8> for Tithi {
    type Error = MuhurtaError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl From<Tithi> for u8 {
    fn from(t: Tithi) -> Self {
        t.0
    }
}

impl fmt::Display for Tithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
