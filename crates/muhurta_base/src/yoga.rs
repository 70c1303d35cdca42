//! Luni-solar yoga from the sum of sidereal Sun and Moon longitudes.
//!
//! (Sun + Moon) mod 360 is split into 27 segments of 13 deg 20'. Nine of the
//! 27 yogas are traditionally inauspicious.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one yoga in degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkumbha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Vishkumbha, Atiganda, Shula, Ganda, Vyaghata, Vajra, Vyatipata,
    /// Parigha and Vaidhriti are inauspicious.
    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::Vishkumbha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }

    /// Yoga from (Sun + Moon) sidereal sum in degrees (any range).
    pub fn from_sum(sum_deg: f64) -> Self {
        let s = normalize_360(sum_deg);
        let idx = ((s / YOGA_SEGMENT_DEG).floor() as usize).min(26);
        ALL_YOGAS[idx]
    }

    /// Yoga from sidereal Sun and Moon longitudes.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> Self {
        Self::from_sum(sun_deg + moon_deg)
    }

    /// All 27 yogas in order.
    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

impl fmt::Display for Yoga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
            assert_eq!(y.number() as usize, i + 1);
        }
    }

    #[test]
    fn inauspicious_numbers() {
        let bad: Vec<u8> = ALL_YOGAS
            .iter()
            .filter(|y| !y.is_auspicious())
            .map(|y| y.number())
            .collect();
        assert_eq!(bad, vec![1, 6, 9, 10, 13, 15, 17, 19, 27]);
    }

    #[test]
    fn sum_wraps() {
        // 200 + 170 = 370 -> 10 deg -> Vishkumbha
        assert_eq!(Yoga::from_longitudes(200.0, 170.0), Yoga::Vishkumbha);
        assert_eq!(Yoga::from_sum(359.99), Yoga::Vaidhriti);
    }

    #[test]
    fn segment_boundary() {
        assert_eq!(Yoga::from_sum(YOGA_SEGMENT_DEG + 1e-9), Yoga::Priti);
    }
}
