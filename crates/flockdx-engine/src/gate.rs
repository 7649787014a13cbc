//! Low-confidence gate.
//!
//! Decides whether a prediction is firm enough to carry severity and a
//! treatment plan. Every outcome is a successful result; weak evidence is
//! reported, never rejected.

/// Fewer symptoms than this are not scored at all.
pub const MIN_SYMPTOMS: usize = 2;
/// Confidence below this withholds treatment.
pub const CONFIDENCE_FLOOR: f64 = 0.25;

pub const INSUFFICIENT_INPUT_MESSAGE: &str = "Please select at least 2 symptoms for a reliable diagnosis. The more symptoms you provide, the more accurate the prediction.";
pub const LOW_CONFIDENCE_MESSAGE: &str = "Confidence is too low for a reliable diagnosis. Try selecting more specific symptoms or adding more details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Too few symptoms supplied; nothing was scored.
    InsufficientInput,
    /// Scored, but no disease survived or confidence is under the floor.
    LowConfidence,
    /// At least one disease and confidence at or above the floor.
    Confident,
}

impl Gate {
    /// Gate applied before scoring. `None` means scoring may proceed.
    pub fn check_input(symptom_count: usize) -> Option<Gate> {
        (symptom_count < MIN_SYMPTOMS).then_some(Gate::InsufficientInput)
    }

    /// Gate applied after scoring and confidence estimation.
    pub fn check_scores(disease_count: usize, confidence: f64) -> Gate {
        if disease_count == 0 || confidence < CONFIDENCE_FLOOR {
            Gate::LowConfidence
        } else {
            Gate::Confident
        }
    }

    pub fn is_low_confidence(&self) -> bool {
        !matches!(self, Gate::Confident)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Gate::InsufficientInput => Some(INSUFFICIENT_INPUT_MESSAGE),
            Gate::LowConfidence => Some(LOW_CONFIDENCE_MESSAGE),
            Gate::Confident => None,
        }
    }
}
