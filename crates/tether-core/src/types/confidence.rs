use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;

/// Confidence score clamped to [0.0, 1.0].
/// Expresses how certain a token-to-component match is, driven by which
/// strategy produced it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Direct token-reference match.
    pub const REFERENCE: Confidence = Confidence(constants::CONFIDENCE_REFERENCE);
    /// Semantic match through an alias chain.
    pub const SEMANTIC: Confidence = Confidence(constants::CONFIDENCE_SEMANTIC);
    /// Partial path-suffix match.
    pub const PARTIAL: Confidence = Confidence(constants::CONFIDENCE_PARTIAL);
    /// Raw value match.
    pub const VALUE: Confidence = Confidence(constants::CONFIDENCE_VALUE);
    /// Composite token assembled from independently matched parts.
    pub const COMPOSITE: Confidence = Confidence(constants::CONFIDENCE_COMPOSITE);

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Arithmetic mean over a slice of confidences. Empty input yields 0.
    pub fn mean_of(values: &[Confidence]) -> Self {
        if values.is_empty() {
            return Self(0.0);
        }
        let sum: f64 = values.iter().map(|c| c.0).sum();
        Self::new(sum / values.len() as f64)
    }

    /// Check whether this confidence clears the given threshold.
    pub fn meets(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
