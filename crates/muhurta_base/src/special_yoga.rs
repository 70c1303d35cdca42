//! Named weekday-tithi-nakshatra combinations.
//!
//! Each rule is a fixed per-weekday lookup; the tithi tables use the
//! number within the paksha (1..=15).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nakshatra::Nakshatra;
use crate::tithi::Tithi;
use crate::vara::Vara;

use Nakshatra::*;

/// A flagged special combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialYoga {
    AmritaSiddhi,
    SarvarthaSiddhi,
    RaviPushya,
    GuruPushya,
    DagdhaTithi,
}

/// All special yogas in detection order.
pub const ALL_SPECIAL_YOGAS: [SpecialYoga; 5] = [
    SpecialYoga::AmritaSiddhi,
    SpecialYoga::SarvarthaSiddhi,
    SpecialYoga::RaviPushya,
    SpecialYoga::GuruPushya,
    SpecialYoga::DagdhaTithi,
];

impl SpecialYoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AmritaSiddhi => "Amrita Siddhi Yoga",
            Self::SarvarthaSiddhi => "Sarvartha Siddhi Yoga",
            Self::RaviPushya => "Ravi Pushya Yoga",
            Self::GuruPushya => "Guru Pushya Yoga",
            Self::DagdhaTithi => "Dagdha Tithi",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::AmritaSiddhi => "Extremely auspicious combination for all activities",
            Self::SarvarthaSiddhi => "Success in all undertakings",
            Self::RaviPushya => "Highly auspicious for purchases and new ventures",
            Self::GuruPushya => "Excellent for education, spirituality, and investments",
            Self::DagdhaTithi => "Burnt tithi - avoid auspicious activities",
        }
    }

    /// Only Dagdha Tithi is inauspicious.
    pub const fn is_auspicious(self) -> bool {
        !matches!(self, Self::DagdhaTithi)
    }
}

impl fmt::Display for SpecialYoga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Weekday tables (Sunday first)
// ---------------------------------------------------------------------------

const AMRITA_SIDDHI_NAKSHATRAS: [&[Nakshatra]; 7] = [
    &[Hasta, Mula, UttaraAshadha],
    &[Mrigashira, Shravana, Rohini],
    &[Ashwini, UttaraPhalguni],
    &[Anuradha, Revati],
    &[Punarvasu, Pushya, Ashwini],
    &[Revati, Anuradha, Swati],
    &[Rohini, Swati],
];

const AMRITA_SIDDHI_TITHIS: [&[u8]; 7] = [
    &[2, 7, 12],
    &[2, 7, 12],
    &[3, 8, 13],
    &[2, 7, 12],
    &[5, 10, 15],
    &[1, 6, 11],
    &[3, 8, 13],
];

const SARVARTHA_SIDDHI_NAKSHATRAS: [&[Nakshatra]; 7] = [
    &[
        Pushya,
        Hasta,
        UttaraBhadrapada,
        UttaraAshadha,
        UttaraPhalguni,
        Mula,
        Ashwini,
    ],
    &[Rohini, Mrigashira, Pushya, Anuradha, Shravana],
    &[Ashwini, UttaraPhalguni, Krittika, Chitra],
    &[Rohini, Anuradha, Hasta, Krittika],
    &[Ashwini, Punarvasu, Pushya, Swati, Revati],
    &[Ashwini, Punarvasu, Anuradha, Revati, Shravana],
    &[Rohini, Swati, Shravana],
];

/// Burnt tithi (number within paksha) per weekday.
const DAGDHA_TITHIS: [u8; 7] = [12, 11, 5, 3, 6, 8, 9];

/// Nakshatra in the weekday list and tithi in the weekday list.
pub fn is_amrita_siddhi(vara: Vara, tithi: Tithi, nakshatra: Nakshatra) -> bool {
    let i = vara.index() as usize;
    AMRITA_SIDDHI_NAKSHATRAS[i].contains(&nakshatra)
        && AMRITA_SIDDHI_TITHIS[i].contains(&tithi.display_number())
}

/// Nakshatra in the weekday list on an auspicious tithi.
pub fn is_sarvartha_siddhi(vara: Vara, tithi: Tithi, nakshatra: Nakshatra) -> bool {
    SARVARTHA_SIDDHI_NAKSHATRAS[vara.index() as usize].contains(&nakshatra) && tithi.is_auspicious()
}

pub fn is_dagdha_tithi(vara: Vara, tithi: Tithi) -> bool {
    DAGDHA_TITHIS[vara.index() as usize] == tithi.display_number()
}

/// Every special yoga formed by the combination, in detection order.
pub fn detect_special_yogas(vara: Vara, tithi: Tithi, nakshatra: Nakshatra) -> Vec<SpecialYoga> {
    let mut yogas = Vec::new();
    if is_amrita_siddhi(vara, tithi, nakshatra) {
        yogas.push(SpecialYoga::AmritaSiddhi);
    }
    if is_sarvartha_siddhi(vara, tithi, nakshatra) {
        yogas.push(SpecialYoga::SarvarthaSiddhi);
    }
    if nakshatra == Pushya {
        match vara {
            Vara::Sunday => yogas.push(SpecialYoga::RaviPushya),
            Vara::Thursday => yogas.push(SpecialYoga::GuruPushya),
            _ => {}
        }
    }
    if is_dagdha_tithi(vara, tithi) {
        yogas.push(SpecialYoga::DagdhaTithi);
    }
    yogas
}
