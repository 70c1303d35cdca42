//! Panchanga classification, day partitioning and muhurta scoring.
//!
//! This crate provides:
//! - The five panchanga limbs (vara, tithi, nakshatra, yoga, karana) from
//!   sidereal Sun/Moon longitudes
//! - Hora, choghadiya, Rahukala/Yamaghanta/Gulikakala, Durmuhurta and
//!   Abhijit partitions of a sunrise-to-sunrise day
//! - Special weekday-tithi-nakshatra combinations and Panchaka dosha
//! - Activity profiles and the generic and activity-weighted scorers
//!
//! Everything here is a pure function of its inputs. Provider access,
//! boundary search and the multi-day window search live in
//! `muhurta_search`.

pub mod activity;
pub mod choghadiya;
pub mod error;
pub mod graha;
pub mod karana;
pub mod nakshatra;
pub mod panchaka;
pub mod panchanga;
pub mod scorer;
pub mod segments;
pub mod snapshot;
pub mod special_yoga;
pub mod time_period;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use activity::{ALL_ACTIVITIES, ActivityProfile, ActivityType};
pub use choghadiya::{Choghadiya, ChoghadiyaNature, day_sequence, night_sequence};
pub use error::MuhurtaError;
pub use graha::{ALL_GRAHAS, CHALDEAN_ORDER, Graha, HoraNature, chaldean_successor};
pub use karana::{Karana, KaranaInfo, KaranaKind, karana_from_elongation, karana_from_longitudes};
pub use nakshatra::{
    ALL_NAKSHATRAS, Element, Gana, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, NakshatraNature,
    PADA_SPAN, nakshatra_from_longitude,
};
pub use panchaka::{ALL_PANCHAKAS, Panchaka, detect_panchaka, in_panchaka_group};
pub use panchanga::Panchanga;
pub use scorer::{
    ActivityAssessment, GeneralAssessment, evaluate, evaluate_for_activity, recommendation_for,
};
pub use segments::{
    AbhijitMuhurta, ChoghadiyaSlot, Hora, InauspiciousKind, InauspiciousPeriods, SolarDay,
    abhijit_muhurta, choghadiya_at, day_choghadiya, hora_at, hora_sequence, inauspicious_periods,
    night_choghadiya,
};
pub use snapshot::{AUSPICIOUS_SCORE, DayFrame, EXCELLENT_SCORE, MuhurtaFactors, MuhurtaSnapshot};
pub use special_yoga::{ALL_SPECIAL_YOGAS, SpecialYoga, detect_special_yogas};
pub use time_period::{TimeOfDayRange, TimePeriod};
pub use tithi::{Paksha, Tithi, TithiNature};
pub use util::normalize_360;
pub use vara::{ALL_VARAS, Vara};
pub use yoga::{ALL_YOGAS, Yoga};
