use flockdx_core::models::prediction::DiagnosedDisease;

use crate::round::round_decimal;

pub const TOP_SCORE_WEIGHT: f64 = 0.4;
pub const SYMPTOM_FACTOR_WEIGHT: f64 = 0.25;
pub const MATCHED_RATIO_WEIGHT: f64 = 0.35;
/// Symptom count at which the symptom factor saturates.
pub const SYMPTOM_SATURATION: f64 = 5.0;
/// Applied when the top disease matched at most one symptom.
pub const WEAK_MATCH_PENALTY: f64 = 0.5;
/// Confidence never exceeds this; the method is a heuristic.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Confidence in the top-ranked disease, in [0, 0.95], rounded to two decimals.
pub fn estimate_confidence(diseases: &[DiagnosedDisease], symptoms: &[String]) -> f64 {
    let Some(top) = diseases.first() else {
        return 0.0;
    };
    if symptoms.is_empty() {
        return 0.0;
    }

    let symptom_count = symptoms.len() as f64;
    let matched_count = top.matched_symptoms.len();

    let top_score = top.match_score / 100.0;
    let symptom_factor = (symptom_count / SYMPTOM_SATURATION).min(1.0);
    let matched_ratio = matched_count as f64 / symptom_count;

    let mut confidence = top_score * TOP_SCORE_WEIGHT
        + symptom_factor * SYMPTOM_FACTOR_WEIGHT
        + matched_ratio * MATCHED_RATIO_WEIGHT;
    if matched_count <= 1 {
        confidence *= WEAK_MATCH_PENALTY;
    }

    round_decimal(confidence.clamp(0.0, MAX_CONFIDENCE), 2)
}
