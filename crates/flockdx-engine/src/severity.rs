//! Overall severity rating.
//!
//! A weighted linear score over the top disease's label, flock mortality and
//! symptom count, scaled by how well the top disease actually matched, then
//! cut into four classes.

use flockdx_core::SeverityLevel;
use flockdx_core::models::prediction::DiagnosedDisease;

pub const LABEL_WEIGHT: f64 = 0.35;
pub const MORTALITY_WEIGHT: f64 = 0.35;
pub const SYMPTOM_WEIGHT: f64 = 0.3;
/// Symptom count at which the symptom bonus saturates.
pub const SYMPTOM_SATURATION: f64 = 6.0;

pub const CRITICAL_CUT: f64 = 3.2;
pub const HIGH_CUT: f64 = 2.2;
pub const MODERATE_CUT: f64 = 1.2;

/// Label weight of a disease severity label; unrecognized labels weigh as moderate.
pub fn label_weight(label: &str) -> f64 {
    SeverityLevel::from_label(label)
        .unwrap_or(SeverityLevel::Moderate)
        .weight()
        .into()
}

/// Mortality percentage on a 0–4 scale.
pub fn mortality_factor(mortality_rate: f64) -> f64 {
    if mortality_rate > 10.0 {
        4.0
    } else if mortality_rate > 5.0 {
        3.0
    } else if mortality_rate > 2.0 {
        2.0
    } else if mortality_rate > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Scale applied for a 0–100 match score. Weak matches damp severity.
pub fn match_quality_factor(match_score: f64) -> f64 {
    if match_score >= 60.0 {
        1.0
    } else if match_score >= 40.0 {
        0.8
    } else if match_score >= 20.0 {
        0.6
    } else {
        0.3
    }
}

/// The unclassified severity score for the top-ranked disease.
pub fn severity_score(top: &DiagnosedDisease, mortality_rate: f64, symptom_count: usize) -> f64 {
    let base = label_weight(&top.severity);
    let symptom_bonus = (symptom_count as f64 / SYMPTOM_SATURATION).min(1.0);

    (base * LABEL_WEIGHT
        + mortality_factor(mortality_rate) * MORTALITY_WEIGHT
        + symptom_bonus * base * SYMPTOM_WEIGHT)
        * match_quality_factor(top.match_score)
}

pub fn classify(score: f64) -> SeverityLevel {
    if score >= CRITICAL_CUT {
        SeverityLevel::Critical
    } else if score >= HIGH_CUT {
        SeverityLevel::High
    } else if score >= MODERATE_CUT {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Low
    }
}

/// Overall severity of a ranked disease list. Empty lists rate as low.
pub fn estimate_severity(
    diseases: &[DiagnosedDisease],
    mortality_rate: f64,
    symptom_count: usize,
) -> SeverityLevel {
    match diseases.first() {
        Some(top) => classify(severity_score(top, mortality_rate, symptom_count)),
        None => SeverityLevel::Low,
    }
}
