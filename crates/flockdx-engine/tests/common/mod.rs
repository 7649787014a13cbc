#![allow(dead_code)]

use std::path::PathBuf;

use flockdx_core::BirdType;
use flockdx_core::models::request::PredictionRequest;
use flockdx_engine::Predictor;

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/kb")
}

pub fn predictor() -> Predictor {
    Predictor::from_dir(&fixture_dir()).expect("fixture knowledge base loads")
}

pub fn request(
    bird_type: BirdType,
    age_days: u32,
    symptoms: &[&str],
    mortality_rate: f64,
) -> PredictionRequest {
    PredictionRequest {
        bird_type,
        age_days,
        breed: "Cobb 500".to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        mortality_rate,
        flock_size: 500,
        additional_info: None,
    }
}
