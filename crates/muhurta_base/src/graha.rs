//! Vedic planet (graha) enum, Chaldean hora order, and hora nature.
//!
//! The 9 grahas rule weekdays, horas, tithis, choghadiyas and nakshatras.
//! Only the 7 classical grahas take part in the hora cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
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

/// Chaldean order of the 7 classical grahas, slowest first.
///
/// Successive horas are ruled by successive entries, wrapping after Chandra.
pub const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

/// Nature of a hora, fixed per ruling graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoraNature {
    Benefic,
    Malefic,
    Neutral,
}

impl HoraNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benefic => "Benefic",
            Self::Malefic => "Malefic",
            Self::Neutral => "Neutral",
        }
    }
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Position in [`CHALDEAN_ORDER`]. Returns None for Rahu/Ketu.
    pub const fn chaldean_position(self) -> Option<usize> {
        match self {
            Self::Shani => Some(0),
            Self::Guru => Some(1),
            Self::Mangal => Some(2),
            Self::Surya => Some(3),
            Self::Shukra => Some(4),
            Self::Buddh => Some(5),
            Self::Chandra => Some(6),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Nature of a hora ruled by this graha.
    ///
    /// Guru, Shukra and Chandra are benefic; Buddh is neutral; the rest are
    /// malefic.
    pub const fn hora_nature(self) -> HoraNature {
        match self {
            Self::Guru | Self::Shukra | Self::Chandra => HoraNature::Benefic,
            Self::Buddh => HoraNature::Neutral,
            _ => HoraNature::Malefic,
        }
    }

    /// All 9 grahas in order.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// The graha `n` steps after `start` in Chaldean order.
///
/// Rahu/Ketu are not part of the cycle and fall back to Surya's position.
pub const fn chaldean_successor(start: Graha, n: usize) -> Graha {
    let base = match start.chaldean_position() {
        Some(p) => p,
        None => 3,
    };
    CHALDEAN_ORDER[(base + n) % 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn chaldean_positions_match_table() {
        for (i, g) in CHALDEAN_ORDER.iter().enumerate() {
            assert_eq!(g.chaldean_position(), Some(i));
        }
        assert_eq!(Graha::Rahu.chaldean_position(), None);
    }

    #[test]
    fn sunday_second_hora_is_venus() {
        // Sunday's first hora is the Sun; the next in Chaldean order is Venus.
        assert_eq!(chaldean_successor(Graha::Surya, 1), Graha::Shukra);
        assert_eq!(chaldean_successor(Graha::Surya, 7), Graha::Surya);
    }

    #[test]
    fn hora_after_24_steps_is_next_weekday_lord() {
        // 24 horas after Sunday's Sun comes Monday's Moon.
        assert_eq!(chaldean_successor(Graha::Surya, 24), Graha::Chandra);
        assert_eq!(chaldean_successor(Graha::Chandra, 24), Graha::Mangal);
        assert_eq!(chaldean_successor(Graha::Shani, 24), Graha::Surya);
    }

    #[test]
    fn hora_natures() {
        assert_eq!(Graha::Guru.hora_nature(), HoraNature::Benefic);
        assert_eq!(Graha::Shukra.hora_nature(), HoraNature::Benefic);
        assert_eq!(Graha::Chandra.hora_nature(), HoraNature::Benefic);
        assert_eq!(Graha::Buddh.hora_nature(), HoraNature::Neutral);
        assert_eq!(Graha::Surya.hora_nature(), HoraNature::Malefic);
        assert_eq!(Graha::Mangal.hora_nature(), HoraNature::Malefic);
        assert_eq!(Graha::Shani.hora_nature(), HoraNature::Malefic);
    }

    #[test]
    fn display_is_english() {
        assert_eq!(Graha::Guru.to_string(), "Jupiter");
    }
}
