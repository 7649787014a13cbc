use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::bird::BirdType;

/// Flock observations submitted for diagnosis.
///
/// Range checks (non-negative mortality, positive flock size) belong to the
/// request layer; the engine accepts whatever arrives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionRequest {
    pub bird_type: BirdType,
    pub age_days: u32,
    /// Shown back to the user; does not affect scoring.
    pub breed: String,
    /// Observed symptoms, free text, case-insensitive.
    pub symptoms: Vec<String>,
    /// Percentage of the flock lost, e.g. `3.0` for 3%.
    pub mortality_rate: f64,
    pub flock_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl PredictionRequest {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
