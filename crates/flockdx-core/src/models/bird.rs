use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The production type of the flock being diagnosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BirdType {
    /// Meat birds, typically marketed at 5–7 weeks.
    Broiler,
    /// Egg-laying hens, in production from roughly 20 weeks.
    Layer,
}

impl BirdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BirdType::Broiler => "broiler",
            BirdType::Layer => "layer",
        }
    }
}

impl fmt::Display for BirdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BirdType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broiler" => Ok(BirdType::Broiler),
            "layer" => Ok(BirdType::Layer),
            _ => Err(CoreError::UnknownBirdType(s.to_string())),
        }
    }
}
