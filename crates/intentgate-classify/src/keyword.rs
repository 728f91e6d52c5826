//! # Additive Keyword Scoring
//!
//! The default [`RiskClassifier`] strategy: serialize the payload to
//! lowercase JSON text and add a fixed weight for every flagged term the
//! text contains. Each term contributes at most once, so the score is a
//! step function of the *set* of matched terms, capped at 1.0.

use serde_json::Value;

use crate::{RiskClassifier, RiskScore};

/// Flagged terms matched by the default classifier configuration.
///
/// Substring containment against the lowercased payload text; each match
/// adds [`DEFAULT_TERM_WEIGHT`] once.
pub const DEFAULT_FLAG_TERMS: &[&str] = &[
    "kill", "bomb", "suicide", "groom", "hate", "pedo", "childporn", "terror",
];

/// Weight added per matched flagged term.
pub const DEFAULT_TERM_WEIGHT: f64 = 0.3;

/// Additive flagged-term risk scorer.
///
/// Monotonicity holds by construction: adding occurrences of a flagged term
/// to a payload can only turn a non-matching term into a matching one,
/// never the reverse, and every match contributes a non-negative weight.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    terms: Vec<String>,
    weight: f64,
}

impl KeywordClassifier {
    /// Build a classifier over a custom term list and per-term weight.
    ///
    /// Terms are lowercased at construction; a negative weight is clamped
    /// to zero to preserve the monotonicity contract.
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>, weight: f64) -> Self {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
            weight: weight.max(0.0),
        }
    }

    /// The configured flagged terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FLAG_TERMS.iter().copied(), DEFAULT_TERM_WEIGHT)
    }
}

impl RiskClassifier for KeywordClassifier {
    fn score(&self, payload: &Value) -> RiskScore {
        // Serializing a parsed Value cannot fail; if it ever did, treat the
        // payload as maximally risky rather than silently passing it.
        let text = match serde_json::to_string(payload) {
            Ok(text) => text.to_lowercase(),
            Err(_) => return RiskScore::new(1.0),
        };
        let matched = self.terms.iter().filter(|term| text.contains(term.as_str())).count();
        RiskScore::new(matched as f64 * self.weight)
    }
}
