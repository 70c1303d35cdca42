//! Vara (weekday) and its ruling graha.
//!
//! The vara is taken from the civil (local) calendar date, Sunday first.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// The 7 varas, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vara {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All 7 varas, Sunday first (index 0 = Sunday).
pub const ALL_VARAS: [Vara; 7] = [
    Vara::Sunday,
    Vara::Monday,
    Vara::Tuesday,
    Vara::Wednesday,
    Vara::Thursday,
    Vara::Friday,
    Vara::Saturday,
];

impl Vara {
    /// English weekday name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Sanskrit name of the vara.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sunday => "Ravivara",
            Self::Monday => "Somavara",
            Self::Tuesday => "Mangalavara",
            Self::Wednesday => "Budhavara",
            Self::Thursday => "Guruvara",
            Self::Friday => "Shukravara",
            Self::Saturday => "Shanivara",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Ruling graha of the weekday; also the lord of its first hora.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Sunday => Graha::Surya,
            Self::Monday => Graha::Chandra,
            Self::Tuesday => Graha::Mangal,
            Self::Wednesday => Graha::Buddh,
            Self::Thursday => Graha::Guru,
            Self::Friday => Graha::Shukra,
            Self::Saturday => Graha::Shani,
        }
    }

    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }

    /// Vara of a civil calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    /// The following weekday.
    pub const fn succ(self) -> Self {
        ALL_VARAS[(self.index() as usize + 1) % 7]
    }

    /// All 7 varas in order.
    pub const fn all() -> &'static [Vara; 7] {
        &ALL_VARAS
    }
}

impl fmt::Display for Vara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
