use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::severity::SeverityLevel;

/// A ranked candidate disease as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosedDisease {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Match percentage in (0, 100], rounded to one decimal.
    pub match_score: f64,
    /// The input symptoms (as supplied) that matched this disease.
    pub matched_symptoms: Vec<String>,
    /// The disease's knowledge-base severity label.
    pub severity: String,
    pub causes: Vec<String>,
    pub mortality_rate: String,
}

/// Recommended treatment for the top-ranked disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub primary: Vec<String>,
    /// Deduplicated and capped at five items. Order is not significant.
    pub supportive: Vec<String>,
    pub medications: Vec<String>,
    pub duration: String,
}

/// The complete outcome of one prediction call.
///
/// Weak evidence is reported here via `low_confidence`, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    /// At most three diseases, best first, each with a positive match score.
    pub diseases: Vec<DiagnosedDisease>,
    pub severity: SeverityLevel,
    pub treatment: Option<TreatmentPlan>,
    pub deficiencies: Option<Vec<String>>,
    /// At most five, deduplicated.
    pub facts: Vec<String>,
    /// At most five, deduplicated.
    pub prevention: Vec<String>,
    pub when_to_call_vet: bool,
    /// In [0, 0.95], rounded to two decimals.
    pub confidence: f64,
    pub low_confidence: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_confidence_message: Option<String>,
}
