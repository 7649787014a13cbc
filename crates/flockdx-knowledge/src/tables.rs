//! On-disk table shapes.
//!
//! Each table is its own JSON file and every section defaults to empty,
//! so a partial knowledge base still deserializes.

use std::collections::{BTreeMap, HashMap};

use flockdx_core::models::disease::{DiseaseRecord, TreatmentRecord};
use flockdx_core::models::reference::{Breed, QuickFacts};
use serde::{Deserialize, Serialize};

pub const DISEASES_FILE: &str = "diseases.json";
pub const SYMPTOMS_FILE: &str = "symptoms.json";
pub const TREATMENTS_FILE: &str = "treatments.json";
pub const REFERENCE_FILE: &str = "reference.json";
pub const TOOLS_FILE: &str = "tools.json";

/// `diseases.json`: disease records grouped by applicability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiseaseTable {
    /// General pool, filtered per bird type via `affects`.
    #[serde(default)]
    pub broiler_diseases: Vec<DiseaseRecord>,
    /// Applies to every layer flock, regardless of `affects`.
    #[serde(default)]
    pub layer_specific: Vec<DiseaseRecord>,
    /// Applies to every flock.
    #[serde(default)]
    pub nutritional_deficiencies: Vec<DiseaseRecord>,
}

/// `symptoms.json`: UI vocabulary and the disease → keyword mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomTable {
    #[serde(default)]
    pub symptom_categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub disease_symptom_mapping: HashMap<String, Vec<String>>,
}

/// `treatments.json`: treatments for diseases without an embedded record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreatmentTable {
    #[serde(default)]
    pub disease_treatments: HashMap<String, TreatmentRecord>,
}

/// `reference.json`: breeds and quick facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Keyed by bird type ("broiler", "layer").
    #[serde(default)]
    pub common_breeds: HashMap<String, Vec<Breed>>,
    #[serde(default)]
    pub quick_facts: QuickFacts,
}

/// The raw tables as read from disk. `None` means the file was absent.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTables {
    pub diseases: Option<DiseaseTable>,
    pub symptoms: Option<SymptomTable>,
    pub treatments: Option<TreatmentTable>,
    pub reference: Option<ReferenceTable>,
    /// Vaccination, feed and biosecurity tools, passed through untouched.
    pub tools: Option<serde_json::Value>,
}

impl KnowledgeTables {
    /// Number of the four core tables that are present.
    pub fn present_count(&self) -> usize {
        [
            self.diseases.is_some(),
            self.symptoms.is_some(),
            self.treatments.is_some(),
            self.reference.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}
