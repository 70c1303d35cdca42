//! Muhurta scoring.
//!
//! Two independent additive passes over the same [`MuhurtaFactors`]:
//! - [`evaluate`]: generic 0-100 score with suitable/avoid activity lists
//! - [`evaluate_for_activity`]: activity-weighted score with reasons and
//!   warnings, used by the window search
//!
//! Both start at 50 and clamp to [0, 100]. Point values are fixed tables,
//! not tunables. Output lists keep first occurrence order without repeats.

use serde::{Deserialize, Serialize};

use crate::activity::{ALL_ACTIVITIES, ActivityType};
use crate::choghadiya::ChoghadiyaNature;
use crate::graha::HoraNature;
use crate::karana::Karana;
use crate::nakshatra::NakshatraNature;
use crate::segments::InauspiciousKind;
use crate::snapshot::MuhurtaFactors;
use crate::tithi::TithiNature;
use crate::util::dedup_in_order;
use crate::vara::Vara;

const BASE_SCORE: i32 = 50;

/// Minimum generic score for an activity to be listed as suitable.
const SUITABLE_MIN_SCORE: i32 = 50;

/// Result of the generic pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralAssessment {
    /// Score in [0, 100].
    pub score: u8,
    pub suitable_activities: Vec<ActivityType>,
    pub avoid_activities: Vec<ActivityType>,
    /// Human-readable notes, positive and negative.
    pub recommendations: Vec<String>,
}

/// Result of the activity-weighted pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssessment {
    pub activity: ActivityType,
    /// Score in [0, 100].
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

fn clamp_score(s: i32) -> u8 {
    s.clamp(0, 100) as u8
}

/// Generic suitability of the instant described by `f`.
pub fn evaluate(f: &MuhurtaFactors) -> GeneralAssessment {
    let mut s = BASE_SCORE;
    let mut rec: Vec<String> = Vec::new();
    let p = &f.panchanga;
    let (vara, tithi, nakshatra) = (p.vara, p.tithi, p.nakshatra.nakshatra);

    match vara {
        Vara::Monday | Vara::Wednesday | Vara::Thursday | Vara::Friday => s += 10,
        Vara::Tuesday | Vara::Saturday => {
            s -= 5;
            rec.push(format!("{vara} requires caution"));
        }
        Vara::Sunday => s += 5,
    }

    if tithi.is_auspicious() {
        s += 15;
        if tithi.nature() == TithiNature::Purna {
            s += 5;
            rec.push("Purna Tithi - excellent".to_string());
        }
    } else {
        s -= 10;
        rec.push(format!("{tithi} is not ideal"));
        if tithi.nature() == TithiNature::Rikta {
            s -= 5;
            rec.push("Rikta Tithi - avoid finance".to_string());
        }
    }

    let general = ActivityType::General.profile();
    if general.favors_nakshatra(nakshatra) {
        s += 20;
        rec.push(format!("{nakshatra} is auspicious"));
    } else if general.avoids_nakshatra(nakshatra) {
        s -= 15;
        rec.push(format!("{nakshatra} requires caution"));
    } else {
        s += 5;
    }

    match nakshatra.nature() {
        NakshatraNature::Dhruva => {
            s += 5;
            rec.push("Fixed - good for permanent".to_string());
        }
        NakshatraNature::Kshipra => {
            s += 3;
            rec.push("Swift - good for quick".to_string());
        }
        NakshatraNature::Mridu => {
            s += 3;
            rec.push("Soft - good for gentle".to_string());
        }
        NakshatraNature::Tikshna | NakshatraNature::Ugra => s -= 5,
        NakshatraNature::Chara | NakshatraNature::Mishra => {}
    }

    if p.yoga.is_auspicious() {
        s += 10;
    } else {
        s -= 10;
        rec.push(format!("{} yoga is inauspicious", p.yoga));
    }

    if p.karana.is_auspicious() {
        s += 5;
    } else {
        s -= 8;
        if p.karana.karana == Karana::Vishti {
            rec.push("Vishti (Bhadra) Karana - avoid".to_string());
        }
    }

    let chog = f.choghadiya.choghadiya;
    s += match chog.nature() {
        ChoghadiyaNature::Excellent => {
            rec.push(format!("{chog} Choghadiya - excellent"));
            15
        }
        ChoghadiyaNature::VeryGood => 10,
        ChoghadiyaNature::Good => 5,
        ChoghadiyaNature::Neutral => 0,
        ChoghadiyaNature::Inauspicious => {
            rec.push(format!("{chog} Choghadiya - inauspicious"));
            -10
        }
    };

    s += match f.hora.nature() {
        HoraNature::Benefic => {
            rec.push(format!("{} Hora - benefic", f.hora.lord.english_name()));
            10
        }
        HoraNature::Malefic => -8,
        HoraNature::Neutral => 2,
    };

    if f.is_abhijit_active() {
        s += 15;
        rec.push("Abhijit Muhurta active".to_string());
    }

    for y in &f.special_yogas {
        if y.is_auspicious() {
            s += 15;
            rec.push(format!("{}: {}", y.name(), y.description()));
        } else {
            s -= 15;
            rec.push(format!("Warning: {}", y.name()));
        }
    }

    if let Some(p) = f.panchaka {
        rec.push(format!("Warning: {p}"));
    }

    for kind in f.active_inauspicious() {
        let (penalty, note) = match kind {
            InauspiciousKind::Rahukala => (25, "Rahukala - avoid"),
            InauspiciousKind::Yamaghanta => (15, "Yamaghanta - avoid travel"),
            InauspiciousKind::Gulikakala => (10, "Gulika Kala - caution"),
            InauspiciousKind::Durmuhurta => (12, "Durmuhurta - avoid"),
        };
        s -= penalty;
        rec.push(note.to_string());
    }

    let mut suitable = Vec::new();
    let mut avoid = Vec::new();
    for activity in ALL_ACTIVITIES {
        let profile = activity.profile();
        let mut ac = 0;
        let mut avoided = false;
        if profile.favors_nakshatra(nakshatra) {
            ac += 3;
        }
        if profile.avoids_nakshatra(nakshatra) {
            ac -= 5;
            avoided = true;
        }
        if profile.favors_vara(vara) {
            ac += 2;
        }
        if profile.favors_tithi(tithi) {
            ac += 2;
        }
        if tithi.is_auspicious() {
            ac += 1;
        }
        if ac >= 5 && !avoided && s >= SUITABLE_MIN_SCORE {
            suitable.push(activity);
        } else if avoided || ac <= -2 {
            avoid.push(activity);
        }
    }

    GeneralAssessment {
        score: clamp_score(s),
        suitable_activities: dedup_in_order(suitable),
        avoid_activities: dedup_in_order(avoid),
        recommendations: dedup_in_order(rec),
    }
}

/// Activity-weighted score of the instant described by `f`.
pub fn evaluate_for_activity(f: &MuhurtaFactors, activity: ActivityType) -> ActivityAssessment {
    let profile = activity.profile();
    let mut s = BASE_SCORE;
    let mut reasons: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let p = &f.panchanga;
    let (vara, tithi, nakshatra) = (p.vara, p.tithi, p.nakshatra.nakshatra);

    if profile.favors_nakshatra(nakshatra) {
        s += 20;
        reasons.push(format!("Excellent Nakshatra: {nakshatra}"));
    } else if profile.avoids_nakshatra(nakshatra) {
        s -= 25;
        warnings.push(format!("Unfavorable Nakshatra: {nakshatra}"));
    }

    if profile.favors_vara(vara) {
        s += 15;
        reasons.push(format!("Favorable day: {vara}"));
    } else if matches!(vara, Vara::Tuesday | Vara::Saturday) && activity != ActivityType::Medical {
        s -= 5;
        warnings.push(format!("{vara} is not ideal"));
    }

    if profile.favors_tithi(tithi) {
        s += 12;
        reasons.push(format!("Favorable Tithi: {tithi}"));
    }
    if !tithi.is_auspicious() {
        s -= 10;
        warnings.push(format!("Tithi ({tithi}) may not be ideal"));
    }
    if tithi.number() == 15 && activity == ActivityType::Spiritual {
        s += 10;
        reasons.push("Purnima - spiritual".to_string());
    }

    let chog = f.choghadiya.choghadiya;
    match chog.nature() {
        ChoghadiyaNature::Excellent | ChoghadiyaNature::VeryGood => {
            s += 10;
            reasons.push(format!("Auspicious Choghadiya: {chog}"));
        }
        ChoghadiyaNature::Inauspicious => {
            s -= 12;
            warnings.push(format!("Inauspicious Choghadiya: {chog}"));
        }
        ChoghadiyaNature::Good | ChoghadiyaNature::Neutral => {}
    }

    match f.hora.nature() {
        HoraNature::Benefic => {
            s += 5;
            reasons.push(format!("Benefic Hora: {}", f.hora.lord.english_name()));
        }
        HoraNature::Malefic => s -= 5,
        HoraNature::Neutral => {}
    }

    if f.is_abhijit_active() {
        s += 15;
        reasons.push("Abhijit Muhurta".to_string());
    }

    for y in &f.special_yogas {
        if y.is_auspicious() {
            s += 15;
            reasons.push(y.name().to_string());
        } else {
            s -= 15;
            warnings.push(y.name().to_string());
        }
    }

    // Panchaka warns without changing the score
    if let Some(p) = f.panchaka.filter(|p| !p.is_activity_safe(activity)) {
        warnings.push(format!("{p} affects {}", activity.name()));
    }

    for kind in f.active_inauspicious() {
        s -= match kind {
            InauspiciousKind::Rahukala => 30,
            InauspiciousKind::Yamaghanta => 15,
            InauspiciousKind::Gulikakala => 10,
            InauspiciousKind::Durmuhurta => 12,
        };
        warnings.push(kind.name().to_string());
    }

    if !p.yoga.is_auspicious() {
        s -= 8;
        warnings.push(format!("Inauspicious Yoga: {}", p.yoga));
    }
    if !p.karana.is_auspicious() {
        s -= 8;
        warnings.push(format!("Inauspicious Karana: {}", p.karana.karana));
    }

    ActivityAssessment {
        activity,
        score: clamp_score(s),
        reasons: dedup_in_order(reasons),
        warnings: dedup_in_order(warnings),
    }
}

/// Recommendation text for a window score.
pub fn recommendation_for(score: u8, activity: ActivityType) -> String {
    let a = activity.key();
    match score {
        90.. => format!(
            "HIGHLY RECOMMENDED: Excellent muhurta for {a}. All major factors are favorable. Proceed with confidence."
        ),
        80..=89 => format!(
            "RECOMMENDED: Very good muhurta for {a}. Most factors support this activity."
        ),
        70..=79 => format!(
            "SUITABLE: Good muhurta for {a}. Consider the minor negative factors before proceeding."
        ),
        60..=69 => "ACCEPTABLE: Average muhurta. Some challenges exist but activity can proceed with awareness.".to_string(),
        _ => "NOT IDEAL: Below threshold. Consider finding a better time.".to_string(),
    }
}
