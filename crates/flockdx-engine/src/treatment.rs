//! Treatment recommendation and veterinary escalation.

use flockdx_core::SeverityLevel;
use flockdx_core::models::prediction::{DiagnosedDisease, TreatmentPlan};
use flockdx_knowledge::Disease;

use crate::collate::unique_capped;
use crate::scoring::ScoredCandidate;

/// Diseases whose detection always warrants a veterinarian.
pub const NOTIFIABLE_DISEASES: [&str; 3] = ["newcastle", "avian_influenza", "mareks_disease"];

/// Supportive measures appended to every disease-specific plan.
pub const GENERAL_SUPPORTIVE_CARE: [&str; 3] = [
    "Electrolytes in drinking water",
    "Vitamin supplementation (AD3E)",
    "Reduce overcrowding and stress",
];

pub const MAX_SUPPORTIVE_ITEMS: usize = 5;
pub const DEFAULT_DURATION: &str = "5-7 days";

/// Mortality percentage above which a vet is always advised.
pub const VET_MORTALITY_THRESHOLD: f64 = 5.0;

/// The disease a treatment plan is built for: either straight from the
/// knowledge base or a candidate that came out of scoring.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Raw(&'a Disease),
    Scored(&'a ScoredCandidate<'a>),
}

impl<'a> Candidate<'a> {
    pub fn disease(&self) -> &'a Disease {
        match *self {
            Candidate::Raw(disease) => disease,
            Candidate::Scored(candidate) => candidate.disease,
        }
    }
}

/// Plan returned when there is no disease to treat.
pub fn consult_vet_plan() -> TreatmentPlan {
    TreatmentPlan {
        primary: vec!["Consult a veterinarian for proper diagnosis".to_string()],
        supportive: vec![
            "Provide electrolytes".to_string(),
            "Ensure clean water".to_string(),
            "Reduce stress".to_string(),
        ],
        medications: Vec::new(),
        duration: "As advised by veterinarian".to_string(),
    }
}

/// Build a treatment plan for the top candidate only.
pub fn recommend_treatment(top: Option<Candidate<'_>>) -> TreatmentPlan {
    let Some(candidate) = top else {
        return consult_vet_plan();
    };
    let record = candidate.disease().treatment.clone().unwrap_or_default();

    let supportive = record
        .supportive
        .into_iter()
        .chain(GENERAL_SUPPORTIVE_CARE.iter().map(|s| s.to_string()));

    TreatmentPlan {
        primary: record.medications,
        supportive: unique_capped(supportive, MAX_SUPPORTIVE_ITEMS),
        medications: Vec::new(),
        duration: record
            .duration
            .unwrap_or_else(|| DEFAULT_DURATION.to_string()),
    }
}

pub fn is_notifiable(disease_id: &str) -> bool {
    NOTIFIABLE_DISEASES.contains(&disease_id)
}

/// Whether the flock owner should call a veterinarian.
pub fn should_call_vet(
    severity: SeverityLevel,
    mortality_rate: f64,
    diseases: &[DiagnosedDisease],
) -> bool {
    severity.is_urgent()
        || mortality_rate > VET_MORTALITY_THRESHOLD
        || diseases.iter().any(|d| is_notifiable(&d.id))
}
