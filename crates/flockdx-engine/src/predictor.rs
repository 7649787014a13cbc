use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use flockdx_core::models::prediction::{DiagnosedDisease, PredictionResult, TreatmentPlan};
use flockdx_core::models::reference::{Breed, DiseaseSummary};
use flockdx_core::models::request::PredictionRequest;
use flockdx_core::{BirdType, SeverityLevel};
use flockdx_knowledge::error::KnowledgeError;
use flockdx_knowledge::KnowledgeBase;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::applicability::applicable_diseases;
use crate::collate::unique_capped;
use crate::confidence::estimate_confidence;
use crate::gate::Gate;
use crate::scoring::{rank, score_diseases};
use crate::severity::estimate_severity;
use crate::treatment::{
    Candidate, VET_MORTALITY_THRESHOLD, recommend_treatment, should_call_vet,
};

/// Facts and prevention tips reported per prediction.
pub const MAX_TIPS: usize = 5;
/// Facts sampled for low-confidence results and the facts endpoint.
pub const RANDOM_FACT_COUNT: usize = 3;

/// Entry point for predictions and knowledge-base lookups.
///
/// Cheap to clone; all clones share one immutable knowledge base.
#[derive(Debug, Clone)]
pub struct Predictor {
    kb: Arc<KnowledgeBase>,
}

impl Predictor {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Load the knowledge base from `dir` and build a predictor over it.
    pub fn from_dir(dir: &Path) -> Result<Self, KnowledgeError> {
        Ok(Self::new(Arc::new(flockdx_knowledge::load_dir(dir)?)))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn predict(&self, request: &PredictionRequest) -> PredictionResult {
        self.predict_with_rng(request, &mut rand::thread_rng())
    }

    /// Like [`Predictor::predict`], drawing sampled facts from `rng`.
    /// Nothing but the `facts` of low-confidence results depends on it.
    pub fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PredictionRequest,
        rng: &mut R,
    ) -> PredictionResult {
        if let Some(gate) = Gate::check_input(request.symptoms.len()) {
            tracing::debug!(
                symptoms = request.symptoms.len(),
                ?gate,
                "prediction skipped"
            );
            return self.withheld(gate, Vec::new(), 0.0, false, rng);
        }

        let applicable = applicable_diseases(&self.kb, request.bird_type);
        let scored = score_diseases(
            &applicable,
            &request.symptoms,
            request.age_days,
            request.bird_type,
        );
        let ranked: Vec<_> = rank(scored)
            .into_iter()
            .filter(|c| c.score > 0.0)
            .collect();

        let diseases: Vec<DiagnosedDisease> = ranked.iter().map(|c| c.to_diagnosed()).collect();
        let confidence = estimate_confidence(&diseases, &request.symptoms);

        let gate = Gate::check_scores(diseases.len(), confidence);
        if gate == Gate::LowConfidence {
            tracing::debug!(
                applicable = applicable.len(),
                candidates = diseases.len(),
                confidence,
                "prediction below confidence floor"
            );
            let call_vet = request.mortality_rate > VET_MORTALITY_THRESHOLD;
            return self.withheld(gate, diseases, confidence, call_vet, rng);
        }

        let severity = estimate_severity(&diseases, request.mortality_rate, request.symptoms.len());
        let treatment = recommend_treatment(ranked.first().map(Candidate::Scored));
        let when_to_call_vet = should_call_vet(severity, request.mortality_rate, &diseases);

        let facts = ranked
            .iter()
            .flat_map(|c| c.disease.record.facts.iter().cloned());
        let prevention = ranked
            .iter()
            .flat_map(|c| c.disease.record.prevention.iter().cloned());
        let deficiencies = unique_capped(
            ranked
                .iter()
                .filter(|c| c.disease.is_deficiency())
                .flat_map(|c| c.disease.record.deficiency.iter().cloned()),
            usize::MAX,
        );

        tracing::debug!(
            top = diseases[0].id.as_str(),
            match_score = diseases[0].match_score,
            %severity,
            confidence,
            when_to_call_vet,
            "prediction complete"
        );

        PredictionResult {
            diseases,
            severity,
            treatment: Some(treatment),
            deficiencies: (!deficiencies.is_empty()).then_some(deficiencies),
            facts: unique_capped(facts, MAX_TIPS),
            prevention: unique_capped(prevention, MAX_TIPS),
            when_to_call_vet,
            confidence,
            low_confidence: false,
            low_confidence_message: None,
        }
    }

    /// Result for a gated prediction: no severity, no treatment, sampled facts.
    fn withheld<R: Rng + ?Sized>(
        &self,
        gate: Gate,
        diseases: Vec<DiagnosedDisease>,
        confidence: f64,
        when_to_call_vet: bool,
        rng: &mut R,
    ) -> PredictionResult {
        PredictionResult {
            diseases,
            severity: SeverityLevel::Low,
            treatment: None,
            deficiencies: None,
            facts: self.random_facts_with_rng(rng),
            prevention: Vec::new(),
            when_to_call_vet,
            confidence,
            low_confidence: gate.is_low_confidence(),
            low_confidence_message: gate.message().map(str::to_string),
        }
    }

    /// Symptom vocabulary grouped by category, for selection screens.
    pub fn symptom_categories(&self) -> &BTreeMap<String, Vec<String>> {
        self.kb.symptom_categories()
    }

    pub fn breeds(&self, bird_type: BirdType) -> &[Breed] {
        self.kb.breeds(bird_type)
    }

    /// Every disease that would be scored for this bird type.
    pub fn disease_list(&self, bird_type: BirdType) -> Vec<DiseaseSummary> {
        applicable_diseases(&self.kb, bird_type)
            .into_iter()
            .map(|d| DiseaseSummary {
                id: d.id().to_string(),
                name: d.name().to_string(),
                category: d.record.category.clone(),
                severity: d.record.severity.clone(),
            })
            .collect()
    }

    pub fn random_facts(&self) -> Vec<String> {
        self.random_facts_with_rng(&mut rand::thread_rng())
    }

    /// Up to three distinct facts sampled from all fact pools.
    pub fn random_facts_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let pool: Vec<&str> = self.kb.quick_facts().all().collect();
        pool.choose_multiple(rng, RANDOM_FACT_COUNT)
            .map(|fact| fact.to_string())
            .collect()
    }

    /// Treatment plan for a disease looked up by id, outside any prediction.
    pub fn treatment_for(&self, disease_id: &str) -> Option<TreatmentPlan> {
        self.kb
            .disease(disease_id)
            .map(|d| recommend_treatment(Some(Candidate::Raw(d))))
    }

    /// Vaccination, feed and biosecurity tools, if the table was shipped.
    pub fn tools(&self) -> Option<&serde_json::Value> {
        self.kb.tools()
    }
}
