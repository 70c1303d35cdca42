//! Karana (half-tithi) from the Moon-Sun elongation.
//!
//! A synodic month holds 60 karanas of 6 deg elongation each. Four are
//! fixed (sthira) and occur once per month: Kimstughna at position 1 and
//! Shakuni, Chatushpada, Nagava at positions 58-60. Positions 2-57 cycle
//! through the seven movable (chara) karanas eight times.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    /// Also called Bhadra.
    Vishti,
    Shakuni,
    Chatushpada,
    Nagava,
    Kimstughna,
}

/// Movable karanas in cycle order.
const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

/// Fixed or movable karana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaranaKind {
    /// Sthira: occurs once per month.
    Fixed,
    /// Chara: repeats eight times per month.
    Movable,
}

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Nagava => "Nagava",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn kind(self) -> KaranaKind {
        match self {
            Self::Shakuni | Self::Chatushpada | Self::Nagava | Self::Kimstughna => {
                KaranaKind::Fixed
            }
            _ => KaranaKind::Movable,
        }
    }

    /// Vishti and the three fixed karanas of the dark fortnight's end are
    /// inauspicious; Kimstughna and the other movable karanas are not.
    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::Vishti | Self::Shakuni | Self::Chatushpada | Self::Nagava
        )
    }

    /// Karana at a 1-based position in the month (1..=60).
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Kimstughna),
            58 => Some(Self::Shakuni),
            59 => Some(Self::Chatushpada),
            60 => Some(Self::Nagava),
            2..=57 => Some(MOVABLE_KARANAS[((number - 2) % 7) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for Karana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a karana lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KaranaInfo {
    /// The karana name.
    pub karana: Karana,
    /// 1-based position within the synodic month (1..=60).
    pub number: u8,
}

impl KaranaInfo {
    pub const fn is_auspicious(&self) -> bool {
        self.karana.is_auspicious()
    }

    pub const fn kind(&self) -> KaranaKind {
        self.karana.kind()
    }
}

/// Determine the karana from Moon-Sun elongation in degrees (any range).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let e = normalize_360(elongation_deg);
    let number = ((e / KARANA_SEGMENT_DEG).floor() as u8).min(59) + 1;
    let karana = match Karana::from_number(number) {
        Some(k) => k,
        None => Karana::Kimstughna,
    };
    KaranaInfo { karana, number }
}

/// Determine the karana from sidereal Sun and Moon longitudes.
pub fn karana_from_longitudes(sun_deg: f64, moon_deg: f64) -> KaranaInfo {
    karana_from_elongation(moon_deg - sun_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_kimstughna() {
        let k = karana_from_elongation(0.0);
        assert_eq!(k.number, 1);
        assert_eq!(k.karana, Karana::Kimstughna);
        assert!(k.is_auspicious());
        assert_eq!(k.kind(), KaranaKind::Fixed);
    }

    #[test]
    fn second_is_bava() {
        assert_eq!(karana_from_elongation(6.0).karana, Karana::Bava);
    }

    #[test]
    fn eighth_is_vishti() {
        // Position 8 -> (8-2) % 7 = 6 -> Vishti
        let k = karana_from_elongation(7.0 * 6.0 + 1.0);
        assert_eq!(k.number, 8);
        assert_eq!(k.karana, Karana::Vishti);
        assert!(!k.is_auspicious());
    }

    #[test]
    fn last_three_fixed() {
        assert_eq!(karana_from_elongation(343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(349.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(355.0).karana, Karana::Nagava);
    }

    #[test]
    fn movable_cycle_repeats_eight_times() {
        let vishti = (1..=60)
            .filter_map(Karana::from_number)
            .filter(|k| *k == Karana::Vishti)
            .count();
        assert_eq!(vishti, 8);
    }

    #[test]
    fn out_of_range_number() {
        assert_eq!(Karana::from_number(0), None);
        assert_eq!(Karana::from_number(61), None);
    }
}
