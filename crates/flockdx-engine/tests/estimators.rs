mod common;

use flockdx_core::SeverityLevel;
use flockdx_core::models::prediction::DiagnosedDisease;
use flockdx_engine::confidence::estimate_confidence;
use flockdx_engine::gate::{Gate, INSUFFICIENT_INPUT_MESSAGE, LOW_CONFIDENCE_MESSAGE};
use flockdx_engine::severity::{
    classify, estimate_severity, label_weight, match_quality_factor, mortality_factor,
    severity_score,
};
use flockdx_engine::treatment::{
    Candidate, GENERAL_SUPPORTIVE_CARE, consult_vet_plan, recommend_treatment, should_call_vet,
};

fn diagnosed(id: &str, severity: &str, match_score: f64, matched: &[&str]) -> DiagnosedDisease {
    DiagnosedDisease {
        id: id.to_string(),
        name: id.to_string(),
        category: "viral".to_string(),
        match_score,
        matched_symptoms: matched.iter().map(|s| s.to_string()).collect(),
        severity: severity.to_string(),
        causes: vec![],
        mortality_rate: "variable".to_string(),
    }
}

fn symptoms(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn severity_of_empty_list_is_low() {
    assert_eq!(estimate_severity(&[], 50.0, 6), SeverityLevel::Low);
}

#[test]
fn severity_factor_tables() {
    assert_eq!(label_weight("critical"), 4.0);
    assert_eq!(label_weight("low"), 1.0);
    assert_eq!(label_weight("unheard-of"), 2.0);
    assert_eq!(label_weight("High"), 3.0);

    assert_eq!(mortality_factor(10.5), 4.0);
    assert_eq!(mortality_factor(10.0), 3.0);
    assert_eq!(mortality_factor(5.0), 2.0);
    assert_eq!(mortality_factor(2.0), 1.0);
    assert_eq!(mortality_factor(0.0), 0.0);

    assert_eq!(match_quality_factor(60.0), 1.0);
    assert_eq!(match_quality_factor(59.9), 0.8);
    assert_eq!(match_quality_factor(40.0), 0.8);
    assert_eq!(match_quality_factor(20.0), 0.6);
    assert_eq!(match_quality_factor(19.9), 0.3);
}

#[test]
fn severity_cut_points() {
    assert_eq!(classify(3.2), SeverityLevel::Critical);
    assert_eq!(classify(3.19), SeverityLevel::High);
    assert_eq!(classify(2.2), SeverityLevel::High);
    assert_eq!(classify(1.2), SeverityLevel::Moderate);
    assert_eq!(classify(1.19), SeverityLevel::Low);
}

#[test]
fn high_mortality_critical_label_with_strong_match_is_critical() {
    let top = diagnosed("newcastle", "critical", 86.2, &["a", "b", "c"]);
    // (4*0.35 + 4*0.35 + 0.5*4*0.3) * 1.0 = 3.4
    let score = severity_score(&top, 12.0, 3);
    assert!((score - 3.4).abs() < 1e-9);
    assert_eq!(estimate_severity(&[top], 12.0, 3), SeverityLevel::Critical);
}

#[test]
fn high_mortality_is_damped_by_weaker_match() {
    let top = diagnosed("newcastle", "critical", 57.5, &["a", "b"]);
    // 3.4 * 0.8 = 2.72
    assert_eq!(estimate_severity(&[top.clone()], 12.0, 3), SeverityLevel::High);

    let weak = diagnosed("newcastle", "critical", 15.0, &["a"]);
    // 3.4 * 0.3 = 1.02
    assert_eq!(estimate_severity(&[weak], 12.0, 3), SeverityLevel::Low);
}

#[test]
fn severity_just_under_high_cut_stays_moderate() {
    // 3*0.35 + 2*0.35 + 0.5*3*0.3 lands a hair below 2.2 in floating point.
    let top = diagnosed("coccidiosis", "high", 86.2, &["a", "b", "c"]);
    assert_eq!(estimate_severity(&[top], 3.0, 3), SeverityLevel::Moderate);
}

#[test]
fn confidence_zero_without_diseases_or_symptoms() {
    let top = diagnosed("crd", "moderate", 50.0, &["a", "b"]);
    assert_eq!(estimate_confidence(&[], &symptoms(&["a", "b"])), 0.0);
    assert_eq!(estimate_confidence(&[top], &[]), 0.0);
}

#[test]
fn confidence_formula() {
    let top = diagnosed("coccidiosis", "high", 86.2, &["a", "b", "c"]);
    // 0.862*0.4 + 0.6*0.25 + 1.0*0.35 = 0.8448
    assert_eq!(estimate_confidence(&[top], &symptoms(&["a", "b", "c"])), 0.84);
}

#[test]
fn confidence_rounds_just_above_half_up() {
    let top = diagnosed("crd", "moderate", 55.0, &["a", "b", "c"]);
    let input = symptoms(&["a", "b", "c", "d", "e", "f"]);
    // 0.55*0.4 + 1.0*0.25 + 0.5*0.35 lands a hair above 0.645
    assert_eq!(estimate_confidence(&[top], &input), 0.65);
}

#[test]
fn confidence_penalizes_single_match() {
    let top = diagnosed("crd", "moderate", 20.8, &["a"]);
    let input = symptoms(&["a", "b", "c", "d", "e", "f"]);
    // (0.208*0.4 + 1.0*0.25 + 1/6*0.35) * 0.5 ≈ 0.196
    assert_eq!(estimate_confidence(&[top], &input), 0.2);
}

#[test]
fn confidence_is_capped() {
    let top = diagnosed("rickets", "moderate", 100.0, &["a", "b", "c", "d", "e"]);
    let input = symptoms(&["a", "b", "c", "d", "e"]);
    assert_eq!(estimate_confidence(&[top], &input), 0.95);
}

#[test]
fn gate_transitions() {
    assert_eq!(Gate::check_input(0), Some(Gate::InsufficientInput));
    assert_eq!(Gate::check_input(1), Some(Gate::InsufficientInput));
    assert_eq!(Gate::check_input(2), None);

    assert_eq!(Gate::check_scores(0, 0.9), Gate::LowConfidence);
    assert_eq!(Gate::check_scores(2, 0.24), Gate::LowConfidence);
    assert_eq!(Gate::check_scores(1, 0.25), Gate::Confident);

    assert_eq!(Gate::InsufficientInput.message(), Some(INSUFFICIENT_INPUT_MESSAGE));
    assert_eq!(Gate::LowConfidence.message(), Some(LOW_CONFIDENCE_MESSAGE));
    assert!(Gate::LowConfidence.is_low_confidence());
    assert!(!Gate::Confident.is_low_confidence());
    assert_eq!(Gate::Confident.message(), None);
}

#[test]
fn no_candidate_gets_consult_plan() {
    let plan = recommend_treatment(None);
    assert_eq!(plan, consult_vet_plan());
    assert_eq!(plan.duration, "As advised by veterinarian");
}

#[test]
fn embedded_treatment_merges_general_care() {
    let predictor = common::predictor();
    let cocci = predictor.knowledge().disease("coccidiosis").unwrap();

    let plan = recommend_treatment(Some(Candidate::Raw(cocci)));
    assert_eq!(
        plan.primary,
        vec!["Amprolium 20% in drinking water", "Toltrazuril"]
    );
    assert_eq!(plan.duration, "5 days");
    assert!(plan.medications.is_empty());

    // "Electrolytes in drinking water" appears in both lists and is kept once.
    assert_eq!(plan.supportive.len(), 4);
    assert!(plan.supportive.contains(&"Vitamin K supplementation".to_string()));
    for care in GENERAL_SUPPORTIVE_CARE {
        assert!(plan.supportive.contains(&care.to_string()));
    }
}

#[test]
fn disease_without_treatment_gets_defaults() {
    let predictor = common::predictor();
    let newcastle = predictor.knowledge().disease("newcastle").unwrap();

    let plan = recommend_treatment(Some(Candidate::Raw(newcastle)));
    assert!(plan.primary.is_empty());
    assert_eq!(plan.duration, "5-7 days");
    assert_eq!(plan.supportive.len(), 3);
}

#[test]
fn supportive_care_is_capped_at_five() {
    let predictor = common::predictor();
    let gumboro = predictor.knowledge().disease("gumboro").unwrap();

    let plan = recommend_treatment(Some(Candidate::Raw(gumboro)));
    // Table entry supplies two items, one shared with the general list.
    assert_eq!(plan.supportive.len(), 4);
    assert_eq!(plan.duration, "7-10 days");
    assert!(plan.supportive.len() <= 5);
}

#[test]
fn vet_escalation_rules() {
    let crd = diagnosed("crd", "moderate", 50.0, &["a", "b"]);
    let newcastle = diagnosed("newcastle", "critical", 20.0, &["a"]);

    assert!(should_call_vet(SeverityLevel::High, 0.0, &[crd.clone()]));
    assert!(should_call_vet(SeverityLevel::Critical, 0.0, &[]));
    assert!(should_call_vet(SeverityLevel::Low, 5.1, &[crd.clone()]));
    assert!(!should_call_vet(SeverityLevel::Moderate, 5.0, &[crd.clone()]));
    assert!(should_call_vet(SeverityLevel::Low, 0.0, &[crd, newcastle]));
}
