//! The five limbs of the day at one instant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::karana::{KaranaInfo, karana_from_longitudes};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::tithi::Tithi;
use crate::vara::Vara;
use crate::yoga::Yoga;

/// Vara, tithi, nakshatra, yoga and karana.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panchanga {
    pub vara: Vara,
    pub tithi: Tithi,
    pub nakshatra: NakshatraInfo,
    pub yoga: Yoga,
    pub karana: KaranaInfo,
}

impl Panchanga {
    /// Classify from the civil date and sidereal Sun/Moon longitudes.
    pub fn from_longitudes(date: NaiveDate, sun_deg: f64, moon_deg: f64) -> Self {
        Self::with_vara(Vara::from_date(date), sun_deg, moon_deg)
    }

    /// Classify with an explicit vara.
    pub fn with_vara(vara: Vara, sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            vara,
            tithi: Tithi::from_longitudes(sun_deg, moon_deg),
            nakshatra: nakshatra_from_longitude(moon_deg),
            yoga: Yoga::from_longitudes(sun_deg, moon_deg),
            karana: karana_from_longitudes(sun_deg, moon_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::karana::Karana;
    use crate::nakshatra::Nakshatra;

    #[test]
    fn new_moon_at_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let p = Panchanga::from_longitudes(date, 0.0, 0.0);
        assert_eq!(p.vara, Vara::Sunday);
        assert_eq!(p.tithi.number(), 1);
        assert_eq!(p.nakshatra.nakshatra, Nakshatra::Ashwini);
        assert_eq!(p.nakshatra.pada, 1);
        assert_eq!(p.yoga, Yoga::Vishkumbha);
        assert_eq!(p.karana.karana, Karana::Kimstughna);
    }

    #[test]
    fn pushya_full_moon() {
        // Moon at 100 deg is Pushya; 180 deg ahead of the Sun is Krishna Pratipada.
        let p = Panchanga::with_vara(Vara::Thursday, 280.0, 100.0);
        assert_eq!(p.nakshatra.nakshatra, Nakshatra::Pushya);
        assert_eq!(p.tithi.number(), 16);
        // 380 -> 20 deg -> Priti
        assert_eq!(p.yoga, Yoga::Priti);
    }
}
