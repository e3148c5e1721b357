//! Matching configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the token-matching subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum confidence for a component match to be kept. Default: 0.85.
    pub min_confidence: Option<f64>,
    /// Absolute tolerance in pixels for dimension comparison. Default: 0.5.
    pub value_tolerance: Option<f64>,
    /// Pixel base for rem/em conversion. Default: 16.0.
    pub rem_base_px: Option<f64>,
    /// Maximum recursion depth into component children. Default: 32.
    pub max_nested_depth: Option<usize>,
}

impl MatchingConfig {
    /// Returns the effective minimum confidence, defaulting to 0.85.
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence
            .unwrap_or(constants::DEFAULT_MIN_CONFIDENCE)
    }

    /// Returns the effective value tolerance in pixels, defaulting to 0.5.
    pub fn effective_value_tolerance(&self) -> f64 {
        self.value_tolerance
            .unwrap_or(constants::DEFAULT_VALUE_TOLERANCE)
    }

    /// Returns the effective rem base in pixels, defaulting to 16.0.
    pub fn effective_rem_base_px(&self) -> f64 {
        self.rem_base_px.unwrap_or(constants::DEFAULT_REM_BASE_PX)
    }

    /// Returns the effective maximum nesting depth, defaulting to 32.
    pub fn effective_max_nested_depth(&self) -> usize {
        self.max_nested_depth
            .unwrap_or(constants::DEFAULT_MAX_NESTED_DEPTH)
    }
}
