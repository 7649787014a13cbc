use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A disease entry exactly as it appears in the knowledge base.
///
/// Everything except `id` and `name` is optional on disk and falls back to
/// a neutral default, so partially-filled tables still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Bird types this disease is tagged for ("broiler", "layer").
    #[serde(default)]
    pub affects: Vec<String>,
    /// Free-text label; normally one of low/moderate/high/critical.
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default = "default_mortality_rate")]
    pub mortality_rate: String,
    /// Free-text age descriptor, e.g. "young chicks", "3-6 weeks", "peak production".
    #[serde(default)]
    pub age_susceptibility: String,
    /// Inline symptom keywords, used when the symptom mapping has no entry.
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub deficiency_related: bool,
    /// Lacking nutrients; only meaningful when `deficiency_related` is set.
    #[serde(default)]
    pub deficiency: Vec<String>,
    #[serde(default)]
    pub prevention: Vec<String>,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub treatment: Option<TreatmentRecord>,
}

/// Treatment details embedded in a disease record or listed in the
/// treatments table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentRecord {
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub supportive: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

fn default_category() -> String {
    "unknown".to_string()
}

fn default_severity() -> String {
    "moderate".to_string()
}

fn default_mortality_rate() -> String {
    "variable".to_string()
}
