//! Choghadiya names, natures, and the weekday sequence tables.
//!
//! Daylight and night are each divided into 8 equal choghadiyas. The name
//! of each slot comes from a fixed 7 x 8 table indexed by weekday (Sunday
//! first); day and night use different tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::vara::Vara;

/// Number of choghadiyas in daylight and in night.
pub const CHOGHADIYAS_PER_HALF: usize = 8;

/// The 7 choghadiya names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choghadiya {
    Udveg,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// Quality class of a choghadiya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChoghadiyaNature {
    Inauspicious,
    Neutral,
    Good,
    VeryGood,
    Excellent,
}

impl ChoghadiyaNature {
    /// Ordinal score, 0 (Inauspicious) to 4 (Excellent).
    pub const fn score(self) -> u8 {
        match self {
            Self::Excellent => 4,
            Self::VeryGood => 3,
            Self::Good => 2,
            Self::Neutral => 1,
            Self::Inauspicious => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Inauspicious => "Inauspicious",
        }
    }
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Char => "Char",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn nature(self) -> ChoghadiyaNature {
        match self {
            Self::Amrit => ChoghadiyaNature::Excellent,
            Self::Labh | Self::Shubh => ChoghadiyaNature::VeryGood,
            Self::Char => ChoghadiyaNature::Good,
            Self::Udveg | Self::Kaal | Self::Rog => ChoghadiyaNature::Inauspicious,
        }
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Udveg => Graha::Surya,
            Self::Char => Graha::Shukra,
            Self::Labh => Graha::Buddh,
            Self::Amrit => Graha::Chandra,
            Self::Kaal => Graha::Shani,
            Self::Shubh => Graha::Guru,
            Self::Rog => Graha::Mangal,
        }
    }

    pub const fn is_auspicious(self) -> bool {
        !matches!(self.nature(), ChoghadiyaNature::Inauspicious)
    }
}

impl fmt::Display for Choghadiya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use Choghadiya::{Amrit as A, Char as C, Kaal as K, Labh as L, Rog as R, Shubh as S, Udveg as U};

const DAY_TABLE: [[Choghadiya; CHOGHADIYAS_PER_HALF]; 7] = [
    [U, C, L, A, K, S, R, U],
    [A, K, S, R, U, C, L, A],
    [R, U, C, L, A, K, S, R],
    [L, A, K, S, R, U, C, L],
    [S, R, U, C, L, A, K, S],
    [C, L, A, K, S, R, U, C],
    [K, S, R, U, C, L, A, K],
];

const NIGHT_TABLE: [[Choghadiya; CHOGHADIYAS_PER_HALF]; 7] = [
    [S, A, C, R, K, L, U, S],
    [C, R, K, L, U, S, A, C],
    [K, L, U, S, A, C, R, K],
    [U, S, A, C, R, K, L, U],
    [A, C, R, K, L, U, S, A],
    [R, K, L, U, S, A, C, R],
    [L, U, S, A, C, R, K, L],
];

/// Day choghadiya names for a weekday, sunrise to sunset.
pub const fn day_sequence(vara: Vara) -> &'static [Choghadiya; CHOGHADIYAS_PER_HALF] {
    &DAY_TABLE[vara.index() as usize]
}

/// Night choghadiya names for a weekday, sunset to next sunrise.
pub const fn night_sequence(vara: Vara) -> &'static [Choghadiya; CHOGHADIYAS_PER_HALF] {
    &NIGHT_TABLE[vara.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vara::ALL_VARAS;

    #[test]
    fn sunday_day_starts_with_udveg() {
        assert_eq!(day_sequence(Vara::Sunday)[0], Choghadiya::Udveg);
        assert_eq!(day_sequence(Vara::Monday)[0], Choghadiya::Amrit);
    }

    #[test]
    fn first_and_last_match() {
        for v in ALL_VARAS {
            let d = day_sequence(v);
            let n = night_sequence(v);
            assert_eq!(d[0], d[7], "day {v}");
            assert_eq!(n[0], n[7], "night {v}");
        }
    }

    #[test]
    fn seven_distinct_in_first_seven() {
        for v in ALL_VARAS {
            let d = day_sequence(v);
            for i in 0..7 {
                for j in (i + 1)..7 {
                    assert_ne!(d[i], d[j], "{v} slots {i} {j}");
                }
            }
        }
    }

    #[test]
    fn natures_and_scores() {
        assert_eq!(Choghadiya::Amrit.nature(), ChoghadiyaNature::Excellent);
        assert_eq!(Choghadiya::Shubh.nature().score(), 3);
        assert_eq!(Choghadiya::Char.nature().score(), 2);
        assert_eq!(Choghadiya::Rog.nature().score(), 0);
        assert!(!Choghadiya::Kaal.is_auspicious());
        assert!(ChoghadiyaNature::Excellent > ChoghadiyaNature::VeryGood);
    }
}
