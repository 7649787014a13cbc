//! Age-susceptibility classification.
//!
//! Knowledge-base records describe susceptible ages in free text. The
//! descriptor is classified into [`AgeWindows`] once, at load time, using
//! literal substring checks; scoring only ever looks at the flags.

use serde::{Deserialize, Serialize};

/// Which age windows a disease is known to strike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeWindows {
    /// Descriptor mentions "all ages".
    pub all_ages: bool,
    /// Descriptor mentions "young" (broiler first week).
    pub young: bool,
    /// Descriptor mentions "3-6 weeks" or "grower" (broiler days 21–35).
    pub grower: bool,
    /// Descriptor mentions "production" or "peak" (layers from day 140).
    pub production: bool,
}

impl AgeWindows {
    pub fn classify(descriptor: &str) -> Self {
        let text = descriptor.to_lowercase();
        Self {
            all_ages: text.contains("all ages"),
            young: text.contains("young"),
            grower: text.contains("3-6 weeks") || text.contains("grower"),
            production: text.contains("production") || text.contains("peak"),
        }
    }
}
