mod common;

use flockdx_core::BirdType;
use flockdx_engine::applicability::{applicable_diseases, applies_to};
use flockdx_engine::matching::Symptom;
use flockdx_engine::scoring::{is_age_appropriate, rank, score_diseases};
use flockdx_knowledge::age::AgeWindows;
use flockdx_knowledge::tables::KnowledgeTables;
use flockdx_knowledge::{Keyword, KnowledgeBase};
use serde_json::json;

fn ids<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    items.into_iter().collect()
}

#[test]
fn broiler_applicability_skips_layer_pool() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();

    let applicable = applicable_diseases(kb, BirdType::Broiler);
    assert_eq!(
        ids(applicable.iter().map(|d| d.id())),
        vec![
            "coccidiosis",
            "newcastle",
            "gumboro",
            "crd",
            "fatty_liver",
            "rickets",
            "vitamin_e_deficiency",
        ]
    );
}

#[test]
fn layer_applicability_includes_layer_pool_once() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();

    let applicable = applicable_diseases(kb, BirdType::Layer);
    assert_eq!(
        ids(applicable.iter().map(|d| d.id())),
        vec![
            "coccidiosis",
            "newcastle",
            "crd",
            "infectious_bronchitis",
            "fatty_liver",
            "egg_drop_syndrome",
            "rickets",
            "vitamin_e_deficiency",
        ]
    );
}

#[test]
fn substring_match_in_either_direction() {
    let keyword = Keyword::new("bloody droppings");
    assert!(Symptom::new("Bloody Droppings").matches(&keyword));
    assert!(Symptom::new("droppings").matches(&keyword));
    assert!(Symptom::new("bloody droppings with mucus").matches(&keyword));
}

#[test]
fn underscore_forms_match() {
    assert!(Symptom::new("bloody droppings").matches(&Keyword::new("bloody_droppings")));
    assert!(Symptom::new("twisted_neck").matches(&Keyword::new("twisted neck")));
}

#[test]
fn word_overlap_ignores_stop_words() {
    let keyword = Keyword::new("drop in egg production");
    assert!(Symptom::new("fewer eggs or egg eating").matches(&keyword));
    assert!(!Symptom::new("pain in the joint").matches(&keyword));
    assert!(!Symptom::new("eggs").matches(&Keyword::new("paralysis")));
}

#[test]
fn blank_symptom_never_matches() {
    assert!(!Symptom::new("   ").matches(&Keyword::new("lethargy")));
    assert!(!Symptom::new("lethargy").matches(&Keyword::new("")));
}

#[test]
fn diseases_without_keywords_are_not_scored() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let applicable = applicable_diseases(kb, BirdType::Broiler);

    let scored = score_diseases(&applicable, &["lethargy".to_string()], 25, BirdType::Broiler);
    assert!(scored.iter().all(|c| c.disease.id() != "fatty_liver"));
    assert_eq!(scored.len(), applicable.len() - 1);
}

#[test]
fn score_combines_ratio_coverage_and_age_bonus() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let applicable = applicable_diseases(kb, BirdType::Broiler);
    let symptoms: Vec<String> = ["bloody droppings", "ruffled feathers", "lethargy"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let scored = score_diseases(&applicable, &symptoms, 25, BirdType::Broiler);
    let cocci = scored.iter().find(|c| c.disease.id() == "coccidiosis").unwrap();

    // (3/6 * 0.5 + 3/3 * 0.5) * 1.15
    assert!((cocci.score - 0.8625).abs() < 1e-9);
    assert_eq!(cocci.matched_symptoms, symptoms);
    assert_eq!(cocci.match_percent(), 86.2);

    let outside_window = score_diseases(&applicable, &symptoms, 40, BirdType::Broiler);
    let cocci = outside_window
        .iter()
        .find(|c| c.disease.id() == "coccidiosis")
        .unwrap();
    assert!((cocci.score - 0.75).abs() < 1e-9);
}

#[test]
fn deficiency_bonus_needs_two_matches() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let rickets = kb.disease("rickets").unwrap();

    let two: Vec<String> = vec!["weakness".into(), "lameness".into()];
    let scored = score_diseases(&[rickets], &two, 60, BirdType::Broiler);
    // (2/5 * 0.5 + 2/2 * 0.5) * 1.1
    assert!((scored[0].score - 0.77).abs() < 1e-9);

    let one: Vec<String> = vec!["weakness".into(), "sneezing".into()];
    let scored = score_diseases(&[rickets], &one, 60, BirdType::Broiler);
    // 1/5 * 0.5 + 1/2 * 0.5
    assert!((scored[0].score - 0.35).abs() < 1e-9);
}

#[test]
fn score_is_clamped_after_bonus() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let egg_drop = kb.disease("egg_drop_syndrome").unwrap();
    let symptoms: Vec<String> = vec![
        "soft shelled eggs".into(),
        "drop in egg production".into(),
        "pale eggs".into(),
    ];

    let young = score_diseases(&[egg_drop], &symptoms, 100, BirdType::Layer);
    assert!((young[0].score - 0.875).abs() < 1e-9);

    let in_lay = score_diseases(&[egg_drop], &symptoms, 150, BirdType::Layer);
    assert_eq!(in_lay[0].score, 1.0);
}

#[test]
fn duplicate_ids_keep_first_position() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let cocci = kb.disease("coccidiosis").unwrap();
    let crd = kb.disease("crd").unwrap();

    let symptoms = vec!["sneezing".to_string(), "lethargy".to_string()];
    let scored = score_diseases(&[cocci, crd, cocci], &symptoms, 60, BirdType::Broiler);
    assert_eq!(ids(scored.iter().map(|c| c.disease.id())), vec!["coccidiosis", "crd"]);
}

#[test]
fn rank_is_stable_and_truncates() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();
    let applicable = applicable_diseases(kb, BirdType::Layer);
    let symptoms: Vec<String> = vec![
        "soft shelled eggs".into(),
        "drop in egg production".into(),
        "pale eggs".into(),
    ];

    let ranked = rank(score_diseases(&applicable, &symptoms, 150, BirdType::Layer));
    assert_eq!(ranked.len(), 3);
    // Both score 1.0; bronchitis comes first in file order.
    assert_eq!(ranked[0].disease.id(), "infectious_bronchitis");
    assert_eq!(ranked[1].disease.id(), "egg_drop_syndrome");
    assert_eq!(ranked[2].disease.id(), "newcastle");
}

#[test]
fn age_windows() {
    let all = AgeWindows::classify("All ages");
    assert!(is_age_appropriate(&all, 400, BirdType::Layer));

    let young = AgeWindows::classify("young chicks");
    assert!(is_age_appropriate(&young, 7, BirdType::Broiler));
    assert!(!is_age_appropriate(&young, 8, BirdType::Broiler));
    assert!(!is_age_appropriate(&young, 3, BirdType::Layer));

    let grower = AgeWindows::classify("3-6 weeks");
    assert!(is_age_appropriate(&grower, 21, BirdType::Broiler));
    assert!(is_age_appropriate(&grower, 35, BirdType::Broiler));
    assert!(!is_age_appropriate(&grower, 36, BirdType::Broiler));

    let peak = AgeWindows::classify("peak production");
    assert!(is_age_appropriate(&peak, 140, BirdType::Layer));
    assert!(!is_age_appropriate(&peak, 139, BirdType::Layer));
    assert!(!is_age_appropriate(&peak, 150, BirdType::Broiler));
}

#[test]
fn pool_decides_applicability() {
    let predictor = common::predictor();
    let kb = predictor.knowledge();

    let eds = kb.disease("egg_drop_syndrome").unwrap();
    assert!(applies_to(eds, BirdType::Layer));
    assert!(!applies_to(eds, BirdType::Broiler));

    let rickets = kb.disease("rickets").unwrap();
    assert!(applies_to(rickets, BirdType::Layer));
    assert!(applies_to(rickets, BirdType::Broiler));

    let gumboro = kb.disease("gumboro").unwrap();
    assert!(!applies_to(gumboro, BirdType::Layer));
}

#[test]
fn match_percent_rounds_the_stored_value() {
    let kb = KnowledgeBase::from_tables(KnowledgeTables {
        diseases: Some(
            serde_json::from_value(json!({
                "nutritional_deficiencies": [{
                    "id": "zinc_deficiency",
                    "name": "Zinc Deficiency",
                    "age_susceptibility": "All ages",
                    "deficiency_related": true,
                    "symptoms": ["frayed feathers", "short legs"]
                }]
            }))
            .unwrap(),
        ),
        ..Default::default()
    });
    let zinc = kb.disease("zinc_deficiency").unwrap();
    let symptoms: Vec<String> = ["frayed feathers", "short legs", "lethargy", "pale comb", "diarrhea"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let scored = score_diseases(&[zinc], &symptoms, 30, BirdType::Broiler);
    assert_eq!(scored[0].matched_symptoms.len(), 2);
    // (2/2 * 0.5 + 2/5 * 0.5) * 1.15 * 1.1 * 100 is stored just below 88.55
    assert_eq!(scored[0].match_percent(), 88.5);
}
