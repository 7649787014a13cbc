use std::collections::{BTreeMap, HashMap};

use flockdx_core::BirdType;
use flockdx_core::models::disease::{DiseaseRecord, TreatmentRecord};
use flockdx_core::models::reference::{Breed, QuickFacts};

use crate::age::AgeWindows;
use crate::tables::{KnowledgeTables, SymptomTable, TreatmentTable};

/// Which section of `diseases.json` a disease came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiseasePool {
    General,
    LayerSpecific,
    Nutritional,
}

/// A symptom keyword phrase, pre-normalized for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// As written in the knowledge base.
    pub phrase: String,
    /// Lower-cased phrase, used for substring checks.
    pub lowered: String,
    /// Whitespace-separated words, with underscores treated as spaces.
    pub words: Vec<String>,
}

impl Keyword {
    pub fn new(phrase: &str) -> Self {
        let lowered = phrase.to_lowercase();
        let words = lowered
            .replace('_', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            phrase: phrase.to_string(),
            lowered,
            words,
        }
    }
}

/// A disease with its keywords, age windows and treatment resolved.
#[derive(Debug, Clone)]
pub struct Disease {
    pub record: DiseaseRecord,
    pub pool: DiseasePool,
    /// Empty when neither the mapping nor the record lists any symptoms.
    pub keywords: Vec<Keyword>,
    pub age: AgeWindows,
    pub treatment: Option<TreatmentRecord>,
}

impl Disease {
    fn resolve(
        record: DiseaseRecord,
        pool: DiseasePool,
        symptoms: &SymptomTable,
        treatments: &TreatmentTable,
    ) -> Self {
        let phrases = symptoms
            .disease_symptom_mapping
            .get(&record.id)
            .unwrap_or(&record.symptoms);
        let keywords = phrases.iter().map(|p| Keyword::new(p)).collect();

        let treatment = record
            .treatment
            .clone()
            .or_else(|| treatments.disease_treatments.get(&record.id).cloned());

        Self {
            age: AgeWindows::classify(&record.age_susceptibility),
            keywords,
            treatment,
            pool,
            record,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn is_deficiency(&self) -> bool {
        self.record.deficiency_related
    }

    /// Whether the general-pool `affects` tags include this bird type.
    pub fn affects(&self, bird_type: BirdType) -> bool {
        self.record
            .affects
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(bird_type.as_str()))
    }
}

/// Immutable, in-memory knowledge base. Build once and share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    general: Vec<Disease>,
    layer_specific: Vec<Disease>,
    nutritional: Vec<Disease>,
    symptom_categories: BTreeMap<String, Vec<String>>,
    breeds: HashMap<String, Vec<Breed>>,
    quick_facts: QuickFacts,
    tools: Option<serde_json::Value>,
}

impl KnowledgeBase {
    /// Resolve raw tables into a knowledge base. Absent tables count as empty.
    pub fn from_tables(tables: KnowledgeTables) -> Self {
        let diseases = tables.diseases.unwrap_or_default();
        let symptoms = tables.symptoms.unwrap_or_default();
        let treatments = tables.treatments.unwrap_or_default();
        let reference = tables.reference.unwrap_or_default();

        let resolve_pool = |records: Vec<DiseaseRecord>, pool: DiseasePool| -> Vec<Disease> {
            records
                .into_iter()
                .map(|r| Disease::resolve(r, pool, &symptoms, &treatments))
                .collect()
        };

        let general = resolve_pool(diseases.broiler_diseases, DiseasePool::General);
        let layer_specific = resolve_pool(diseases.layer_specific, DiseasePool::LayerSpecific);
        let nutritional = resolve_pool(diseases.nutritional_deficiencies, DiseasePool::Nutritional);

        Self {
            general,
            layer_specific,
            nutritional,
            symptom_categories: symptoms.symptom_categories,
            breeds: reference.common_breeds,
            quick_facts: reference.quick_facts,
            tools: tables.tools,
        }
    }

    pub fn general(&self) -> &[Disease] {
        &self.general
    }

    pub fn layer_specific(&self) -> &[Disease] {
        &self.layer_specific
    }

    pub fn nutritional(&self) -> &[Disease] {
        &self.nutritional
    }

    /// Every disease in file order: general, layer-specific, nutritional.
    pub fn all_diseases(&self) -> impl Iterator<Item = &Disease> {
        self.general
            .iter()
            .chain(&self.layer_specific)
            .chain(&self.nutritional)
    }

    /// First disease with this identifier, in file order.
    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.all_diseases().find(|d| d.id() == id)
    }

    pub fn symptom_categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.symptom_categories
    }

    pub fn breeds(&self, bird_type: BirdType) -> &[Breed] {
        self.breeds
            .get(bird_type.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn quick_facts(&self) -> &QuickFacts {
        &self.quick_facts
    }

    pub fn tools(&self) -> Option<&serde_json::Value> {
        self.tools.as_ref()
    }

    pub fn disease_count(&self) -> usize {
        self.general.len() + self.layer_specific.len() + self.nutritional.len()
    }
}
