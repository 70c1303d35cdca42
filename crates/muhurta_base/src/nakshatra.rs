//! Nakshatra (lunar mansion) of the Moon and its fixed classifications.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.
//!
//! Every nakshatra carries:
//! - a nature (Dhruva, Chara, Tikshna, Ugra, Mridu, Kshipra, Mishra)
//! - a gana (Deva, Manushya, Rakshasa)
//! - an element (Vayu, Agni, Prithvi, Jala, Akasha)
//! - a Vimshottari lord

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lords, repeating every 9 nakshatras from Ashwini.
const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Nature (activity class) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NakshatraNature {
    /// Fixed.
    Dhruva,
    /// Movable.
    Chara,
    /// Sharp.
    Tikshna,
    /// Fierce.
    Ugra,
    /// Soft.
    Mridu,
    /// Swift.
    Kshipra,
    /// Mixed.
    Mishra,
}

impl NakshatraNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dhruva => "Fixed/Dhruva",
            Self::Chara => "Movable/Chara",
            Self::Tikshna => "Sharp/Tikshna",
            Self::Ugra => "Fierce/Ugra",
            Self::Mridu => "Soft/Mridu",
            Self::Kshipra => "Swift/Kshipra",
            Self::Mishra => "Mixed/Mishra",
        }
    }
}

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Element (tattva) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Vayu,
    Agni,
    Prithvi,
    Jala,
    Akasha,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vayu => "Air",
            Self::Agni => "Fire",
            Self::Prithvi => "Earth",
            Self::Jala => "Water",
            Self::Akasha => "Ether",
        }
    }
}

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    pub const fn nature(self) -> NakshatraNature {
        use Nakshatra::*;
        match self {
            UttaraPhalguni | UttaraAshadha | UttaraBhadrapada | Rohini => NakshatraNature::Dhruva,
            Punarvasu | Swati | Shravana | Dhanishtha | Shatabhisha => NakshatraNature::Chara,
            Mula | Ardra | Jyeshtha | Ashlesha => NakshatraNature::Tikshna,
            PurvaPhalguni | PurvaAshadha | PurvaBhadrapada | Bharani | Magha => {
                NakshatraNature::Ugra
            }
            Mrigashira | Chitra | Anuradha | Revati => NakshatraNature::Mridu,
            Ashwini | Pushya | Hasta => NakshatraNature::Kshipra,
            Vishakha | Krittika => NakshatraNature::Mishra,
        }
    }

    pub const fn gana(self) -> Gana {
        use Nakshatra::*;
        match self {
            Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
            | Revati => Gana::Deva,
            Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
            | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
            _ => Gana::Rakshasa,
        }
    }

    pub const fn element(self) -> Element {
        use Nakshatra::*;
        match self {
            Swati | Punarvasu | Hasta | Anuradha | Shravana => Element::Vayu,
            Krittika | Bharani | Pushya | PurvaPhalguni | Vishakha | PurvaAshadha => Element::Agni,
            Ashwini | Mrigashira | UttaraPhalguni | Chitra | UttaraAshadha | UttaraBhadrapada => {
                Element::Prithvi
            }
            Rohini | Ardra | Ashlesha | Magha | Jyeshtha | Mula | PurvaBhadrapada | Revati => {
                Element::Jala
            }
            _ => Element::Akasha,
        }
    }

    /// Vimshottari dasha lord.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }

    /// Start of this nakshatra in sidereal degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * NAKSHATRA_SPAN_27
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    pub const fn nature(&self) -> NakshatraNature {
        self.nakshatra.nature()
    }

    pub const fn gana(&self) -> Gana {
        self.nakshatra.gana()
    }

    pub const fn element(&self) -> Element {
        self.nakshatra.element()
    }

    pub const fn lord(&self) -> Graha {
        self.nakshatra.lord()
    }
}

/// Determine nakshatra and pada from the Moon's sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn zero_is_ashwini_pada_1() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn last_degree_is_revati_pada_4() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pushya_second_pada() {
        let lon = 7.0 * NAKSHATRA_SPAN_27 + 5.0;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra, Nakshatra::Pushya);
        assert_eq!(info.pada, 2);
        assert!((info.degrees_in_nakshatra - 5.0).abs() < 1e-9);
    }

    #[test]
    fn negative_longitude_wraps() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn nature_counts() {
        let count = |n: NakshatraNature| ALL_NAKSHATRAS.iter().filter(|x| x.nature() == n).count();
        assert_eq!(count(NakshatraNature::Dhruva), 4);
        assert_eq!(count(NakshatraNature::Chara), 5);
        assert_eq!(count(NakshatraNature::Tikshna), 4);
        assert_eq!(count(NakshatraNature::Ugra), 5);
        assert_eq!(count(NakshatraNature::Mridu), 4);
        assert_eq!(count(NakshatraNature::Kshipra), 3);
        assert_eq!(count(NakshatraNature::Mishra), 2);
    }

    #[test]
    fn gana_counts_nine_each() {
        for g in [Gana::Deva, Gana::Manushya, Gana::Rakshasa] {
            let n = ALL_NAKSHATRAS.iter().filter(|x| x.gana() == g).count();
            assert_eq!(n, 9, "{}", g.name());
        }
    }

    #[test]
    fn elements() {
        assert_eq!(Nakshatra::Swati.element(), Element::Vayu);
        assert_eq!(Nakshatra::Krittika.element(), Element::Agni);
        assert_eq!(Nakshatra::Chitra.element(), Element::Prithvi);
        assert_eq!(Nakshatra::Revati.element(), Element::Jala);
        assert_eq!(Nakshatra::Dhanishtha.element(), Element::Akasha);
    }

    #[test]
    fn vimshottari_lords() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Pushya.lord(), Graha::Shani);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
    }
}
