//! flockdx-engine
//!
//! Symptom scoring and triage inference. Pure and synchronous: every
//! prediction is a read-only pass over a shared [`KnowledgeBase`], so a
//! single [`Predictor`] can serve any number of concurrent callers.
//!
//! [`KnowledgeBase`]: flockdx_knowledge::KnowledgeBase

pub mod applicability;
pub mod confidence;
pub mod gate;
pub mod matching;
pub mod predictor;
pub mod scoring;
pub mod severity;
pub mod treatment;

mod collate;
mod round;

pub use predictor::Predictor;
