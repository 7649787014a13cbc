//! Symptom ↔ keyword matching.

use flockdx_knowledge::Keyword;

/// Words ignored when comparing a symptom and a keyword word by word.
pub const STOP_WORDS: [&str; 8] = ["in", "of", "the", "and", "or", "a", "an", "to"];

/// An input symptom, normalized once per prediction.
#[derive(Debug, Clone)]
pub struct Symptom<'a> {
    pub original: &'a str,
    lowered: String,
    underscored: String,
    words: Vec<String>,
}

impl<'a> Symptom<'a> {
    pub fn new(original: &'a str) -> Self {
        let lowered = original.trim().to_lowercase();
        let underscored = lowered.replace(' ', "_");
        let words = lowered
            .replace('_', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            original,
            lowered,
            underscored,
            words,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Whether this symptom matches a single keyword phrase.
    ///
    /// Either string containing the other (in plain or underscore form) is a
    /// match; failing that, sharing any word outside [`STOP_WORDS`] is.
    pub fn matches(&self, keyword: &Keyword) -> bool {
        // An empty string is a substring of everything; blanks match nothing.
        if self.is_blank() || keyword.lowered.trim().is_empty() {
            return false;
        }

        let kw = keyword.lowered.as_str();
        let substring = [self.lowered.as_str(), self.underscored.as_str()]
            .into_iter()
            .any(|s| kw.contains(s) || s.contains(kw));
        if substring {
            return true;
        }

        self.words
            .iter()
            .filter(|w| !STOP_WORDS.contains(&w.as_str()))
            .any(|w| keyword.words.contains(w))
    }

    /// Whether any of the keywords matches.
    pub fn matches_any(&self, keywords: &[Keyword]) -> bool {
        keywords.iter().any(|k| self.matches(k))
    }
}
