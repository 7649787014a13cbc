use std::collections::HashMap;

use flockdx_core::BirdType;
use flockdx_core::models::prediction::DiagnosedDisease;
use flockdx_knowledge::Disease;
use flockdx_knowledge::age::AgeWindows;

use crate::matching::Symptom;
use crate::round::round_decimal;

/// Weight of the keyword match ratio in the base score.
pub const MATCH_RATIO_WEIGHT: f64 = 0.5;
/// Weight of the input coverage in the base score.
pub const INPUT_COVERAGE_WEIGHT: f64 = 0.5;
/// Multiplier for diseases typical of the flock's age.
pub const AGE_BONUS: f64 = 1.15;
/// Multiplier for deficiency diseases with at least [`DEFICIENCY_MIN_MATCHES`] matches.
pub const DEFICIENCY_BONUS: f64 = 1.1;
pub const DEFICIENCY_MIN_MATCHES: usize = 2;
/// Number of candidates kept after ranking.
pub const TOP_CANDIDATES: usize = 3;

/// A disease scored against one set of input symptoms.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub disease: &'a Disease,
    /// Normalized score in [0, 1].
    pub score: f64,
    /// Input symptoms, as supplied, that matched at least one keyword.
    pub matched_symptoms: Vec<String>,
}

impl ScoredCandidate<'_> {
    /// Score as a 0–100 percentage, rounded half-to-even to one decimal.
    pub fn match_percent(&self) -> f64 {
        round_decimal(self.score * 100.0, 1)
    }

    pub fn to_diagnosed(&self) -> DiagnosedDisease {
        let record = &self.disease.record;
        DiagnosedDisease {
            id: record.id.clone(),
            name: self.disease.name().to_string(),
            category: record.category.clone(),
            match_score: self.match_percent(),
            matched_symptoms: self.matched_symptoms.clone(),
            severity: record.severity.clone(),
            causes: record.causes.clone(),
            mortality_rate: record.mortality_rate.clone(),
        }
    }
}

/// Whether a disease is typical of a flock this old.
pub fn is_age_appropriate(age: &AgeWindows, age_days: u32, bird_type: BirdType) -> bool {
    if age.all_ages {
        return true;
    }

    match bird_type {
        BirdType::Broiler => {
            (age_days <= 7 && age.young) || ((21..=35).contains(&age_days) && age.grower)
        }
        BirdType::Layer => age_days >= 140 && age.production,
    }
}

/// Score one disease. Returns `None` for diseases with no keywords.
pub fn score_disease<'a>(
    disease: &'a Disease,
    symptoms: &[Symptom<'_>],
    age_days: u32,
    bird_type: BirdType,
) -> Option<ScoredCandidate<'a>> {
    if disease.keywords.is_empty() {
        return None;
    }

    let matched_symptoms: Vec<String> = symptoms
        .iter()
        .filter(|s| s.matches_any(&disease.keywords))
        .map(|s| s.original.to_string())
        .collect();

    let matched = matched_symptoms.len() as f64;
    let match_ratio = matched / disease.keywords.len() as f64;
    let input_coverage = if symptoms.is_empty() {
        0.0
    } else {
        matched / symptoms.len() as f64
    };

    let mut score = match_ratio * MATCH_RATIO_WEIGHT + input_coverage * INPUT_COVERAGE_WEIGHT;
    if is_age_appropriate(&disease.age, age_days, bird_type) {
        score *= AGE_BONUS;
    }
    if disease.is_deficiency() && matched_symptoms.len() >= DEFICIENCY_MIN_MATCHES {
        score *= DEFICIENCY_BONUS;
    }

    Some(ScoredCandidate {
        disease,
        score: score.min(1.0),
        matched_symptoms,
    })
}

/// Score every disease that has keywords, keyed by disease id.
///
/// The result keeps the iteration order of `diseases`. If an id occurs more
/// than once, the later score replaces the earlier one in place.
pub fn score_diseases<'a>(
    diseases: &[&'a Disease],
    symptoms: &[String],
    age_days: u32,
    bird_type: BirdType,
) -> Vec<ScoredCandidate<'a>> {
    let symptoms: Vec<Symptom<'_>> = symptoms.iter().map(|s| Symptom::new(s)).collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut scored: Vec<ScoredCandidate<'a>> = Vec::new();

    for &disease in diseases {
        let Some(candidate) = score_disease(disease, &symptoms, age_days, bird_type) else {
            continue;
        };
        match positions.get(disease.id()) {
            Some(&i) => scored[i] = candidate,
            None => {
                positions.insert(disease.id(), scored.len());
                scored.push(candidate);
            }
        }
    }

    scored
}

/// Sort by score, best first, and keep the top [`TOP_CANDIDATES`].
/// Ties keep their input order.
pub fn rank(mut candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(TOP_CANDIDATES);
    candidates
}
