//! flockdx-core
//!
//! Pure domain types for poultry disease triage: bird types, severity
//! classes, knowledge-base records, and the prediction request/result shapes.
//! No I/O. This is the shared vocabulary of the flockdx system.

pub mod error;
pub mod models;

pub use models::bird::BirdType;
pub use models::severity::SeverityLevel;
