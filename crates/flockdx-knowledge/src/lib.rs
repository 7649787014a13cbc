//! flockdx-knowledge
//!
//! The poultry disease knowledge base: JSON table loading, symptom keyword
//! resolution, and one-time classification of free-text age descriptors.
//! Loaded once, then shared read-only across predictions.

pub mod age;
pub mod base;
pub mod error;
pub mod loader;
pub mod tables;

pub use base::{Disease, DiseasePool, Keyword, KnowledgeBase};
pub use loader::load_dir;
