use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A breed descriptor from the reference table. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breed {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
}

/// Quick facts pools, grouped by audience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuickFacts {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub broiler: Vec<String>,
    #[serde(default)]
    pub layer: Vec<String>,
}

impl QuickFacts {
    /// All facts in pool order: general, then broiler, then layer.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.general
            .iter()
            .chain(&self.broiler)
            .chain(&self.layer)
            .map(String::as_str)
    }
}

/// Simplified disease listing for reference screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub severity: String,
}
