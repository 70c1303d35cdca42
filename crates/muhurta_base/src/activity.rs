//! Activity types and their static electional profiles.
//!
//! A profile lists the nakshatras, tithis (number within the paksha) and
//! weekdays that favour an activity, plus nakshatras to avoid. Profiles are
//! compile-time tables and never change at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MuhurtaError;
use crate::nakshatra::Nakshatra::{self, *};
use crate::tithi::Tithi;
use crate::vara::Vara::{self, Friday, Monday, Sunday, Thursday, Wednesday};

/// Activity for which a muhurta is sought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Marriage,
    Travel,
    Business,
    Property,
    Education,
    Medical,
    Vehicle,
    Spiritual,
    GrihaPravesha,
    NamingCeremony,
    General,
}

/// All activity types in table order.
pub const ALL_ACTIVITIES: [ActivityType; 11] = [
    ActivityType::Marriage,
    ActivityType::Travel,
    ActivityType::Business,
    ActivityType::Property,
    ActivityType::Education,
    ActivityType::Medical,
    ActivityType::Vehicle,
    ActivityType::Spiritual,
    ActivityType::GrihaPravesha,
    ActivityType::NamingCeremony,
    ActivityType::General,
];

impl ActivityType {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "Marriage",
            Self::Travel => "Travel",
            Self::Business => "Business",
            Self::Property => "Property",
            Self::Education => "Education",
            Self::Medical => "Medical",
            Self::Vehicle => "Vehicle",
            Self::Spiritual => "Spiritual",
            Self::GrihaPravesha => "Griha Pravesha",
            Self::NamingCeremony => "Naming Ceremony",
            Self::General => "General",
        }
    }

    /// Lowercase snake_case key, as used in config files and reports.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::Travel => "travel",
            Self::Business => "business",
            Self::Property => "property",
            Self::Education => "education",
            Self::Medical => "medical",
            Self::Vehicle => "vehicle",
            Self::Spiritual => "spiritual",
            Self::GrihaPravesha => "griha_pravesha",
            Self::NamingCeremony => "naming_ceremony",
            Self::General => "general",
        }
    }

    /// Parse a key, case-insensitively; `-` is accepted for `_`.
    pub fn from_key(key: &str) -> Result<Self, MuhurtaError> {
        let key = key.trim().to_ascii_lowercase().replace('-', "_");
        ALL_ACTIVITIES
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or(MuhurtaError::InvalidInput("unknown activity type"))
    }

    pub fn profile(self) -> &'static ActivityProfile {
        match self {
            Self::Marriage => &MARRIAGE,
            Self::Travel => &TRAVEL,
            Self::Business => &BUSINESS,
            Self::Property => &PROPERTY,
            Self::Education => &EDUCATION,
            Self::Medical => &MEDICAL,
            Self::Vehicle => &VEHICLE,
            Self::Spiritual => &SPIRITUAL,
            Self::GrihaPravesha => &GRIHA_PRAVESHA,
            Self::NamingCeremony => &NAMING_CEREMONY,
            Self::General => &GENERAL,
        }
    }

    pub const fn all() -> &'static [ActivityType; 11] {
        &ALL_ACTIVITIES
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityType {
    type Err = MuhurtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Static electional preferences of one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityProfile {
    pub favorable_nakshatras: &'static [Nakshatra],
    /// Tithi numbers within the paksha (1..=15).
    pub favorable_tithis: &'static [u8],
    pub favorable_varas: &'static [Vara],
    pub avoid_nakshatras: &'static [Nakshatra],
}

impl ActivityProfile {
    pub fn favors_nakshatra(&self, n: Nakshatra) -> bool {
        self.favorable_nakshatras.contains(&n)
    }

    pub fn avoids_nakshatra(&self, n: Nakshatra) -> bool {
        self.avoid_nakshatras.contains(&n)
    }

    /// Compares the tithi's number within its paksha.
    pub fn favors_tithi(&self, t: Tithi) -> bool {
        self.favorable_tithis.contains(&t.display_number())
    }

    pub fn favors_vara(&self, v: Vara) -> bool {
        self.favorable_varas.contains(&v)
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

const MARRIAGE_TITHIS: &[u8] = &[2, 3, 5, 7, 10, 11, 12, 13];
const WEEKDAYS_MWTF: &[Vara] = &[Monday, Wednesday, Thursday, Friday];

static MARRIAGE: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Rohini,
        Mrigashira,
        Magha,
        UttaraPhalguni,
        Hasta,
        Swati,
        Anuradha,
        Mula,
        UttaraAshadha,
        UttaraBhadrapada,
        Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[
        Bharani,
        Krittika,
        Ardra,
        Ashlesha,
        PurvaPhalguni,
        Vishakha,
        Jyeshtha,
        PurvaAshadha,
        PurvaBhadrapada,
    ],
};

static TRAVEL: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini, Mrigashira, Punarvasu, Pushya, Hasta, Anuradha, Shravana, Dhanishtha, Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[Ardra, Ashlesha, Jyeshtha, Mula, Bharani],
};

static BUSINESS: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Rohini,
        Pushya,
        Hasta,
        Chitra,
        Swati,
        Anuradha,
        Shravana,
        Dhanishtha,
        Revati,
        UttaraPhalguni,
        UttaraAshadha,
        UttaraBhadrapada,
    ],
    favorable_tithis: &[1, 2, 3, 5, 7, 10, 11, 13],
    favorable_varas: &[Wednesday, Thursday, Friday],
    avoid_nakshatras: &[Bharani, Ashlesha, Mula, Jyeshtha, Ardra],
};

static PROPERTY: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Rohini,
        Mrigashira,
        UttaraPhalguni,
        Hasta,
        Chitra,
        Swati,
        Anuradha,
        UttaraAshadha,
        Shravana,
        Dhanishtha,
        Shatabhisha,
        UttaraBhadrapada,
        Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[Ardra, Ashlesha, Jyeshtha, Mula, Bharani, Krittika],
};

static EDUCATION: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini,
        Rohini,
        Mrigashira,
        Punarvasu,
        Pushya,
        Hasta,
        Chitra,
        Swati,
        Shravana,
        Dhanishtha,
        Shatabhisha,
        Revati,
    ],
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 12],
    favorable_varas: &[Wednesday, Thursday, Friday, Monday],
    avoid_nakshatras: &[Krittika, Ardra, Ashlesha, Bharani, Mula],
};

static MEDICAL: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini,
        Rohini,
        Mrigashira,
        Punarvasu,
        Pushya,
        UttaraPhalguni,
        Hasta,
        Chitra,
        Shravana,
        Dhanishtha,
        Revati,
    ],
    favorable_tithis: &[2, 3, 5, 6, 7, 10, 11, 12],
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[Bharani, Krittika, Ardra, Ashlesha, Jyeshtha, Mula],
};

static VEHICLE: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini, Rohini, Pushya, Hasta, Swati, Anuradha, Shravana, Dhanishtha, Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: &[Wednesday, Thursday, Friday],
    avoid_nakshatras: &[Bharani, Mula, Vishakha, Ardra, Ashlesha],
};

static SPIRITUAL: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini,
        Punarvasu,
        Pushya,
        Hasta,
        Swati,
        Anuradha,
        Shravana,
        UttaraBhadrapada,
        Revati,
        Mrigashira,
        Chitra,
    ],
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 12, 13, 15],
    favorable_varas: &[Monday, Thursday, Friday, Sunday],
    avoid_nakshatras: &[Krittika, Ardra, Ashlesha, Bharani, Mula, Jyeshtha],
};

static GRIHA_PRAVESHA: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Rohini,
        Mrigashira,
        UttaraPhalguni,
        Hasta,
        Chitra,
        Swati,
        Anuradha,
        UttaraAshadha,
        Shravana,
        Dhanishtha,
        UttaraBhadrapada,
        Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[
        Ardra,
        Ashlesha,
        Jyeshtha,
        Mula,
        Bharani,
        Krittika,
        PurvaPhalguni,
        PurvaAshadha,
        PurvaBhadrapada,
    ],
};

static NAMING_CEREMONY: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini,
        Rohini,
        Mrigashira,
        Punarvasu,
        Pushya,
        UttaraPhalguni,
        Hasta,
        Chitra,
        Swati,
        Anuradha,
        Shravana,
        Dhanishtha,
        Shatabhisha,
        UttaraBhadrapada,
        Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[Bharani, Krittika, Ardra, Ashlesha, Mula, Jyeshtha],
};

static GENERAL: ActivityProfile = ActivityProfile {
    favorable_nakshatras: &[
        Ashwini,
        Rohini,
        Mrigashira,
        Punarvasu,
        Pushya,
        UttaraPhalguni,
        Hasta,
        Chitra,
        Swati,
        Anuradha,
        Shravana,
        Dhanishtha,
        UttaraBhadrapada,
        Revati,
    ],
    favorable_tithis: MARRIAGE_TITHIS,
    favorable_varas: WEEKDAYS_MWTF,
    avoid_nakshatras: &[Bharani, Krittika, Ardra, Ashlesha, Mula, Jyeshtha],
};
