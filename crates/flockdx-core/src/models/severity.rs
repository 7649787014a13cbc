use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal severity class, used both as a disease label in the knowledge
/// base and as the overall rating of a prediction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    /// Base weight of a disease label in the severity formula (1–4).
    pub fn weight(&self) -> u8 {
        match self {
            SeverityLevel::Low => 1,
            SeverityLevel::Moderate => 2,
            SeverityLevel::High => 3,
            SeverityLevel::Critical => 4,
        }
    }

    /// Lenient parse of a free-text knowledge-base label.
    /// Returns `None` for anything outside the four known classes.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(SeverityLevel::Low),
            "moderate" => Some(SeverityLevel::Moderate),
            "high" => Some(SeverityLevel::High),
            "critical" => Some(SeverityLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }

    /// High and critical ratings always warrant a veterinarian.
    pub fn is_urgent(&self) -> bool {
        matches!(self, SeverityLevel::High | SeverityLevel::Critical)
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}
