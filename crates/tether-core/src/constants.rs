//! Shared constants for the Tether matching engine.

/// Tether version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum confidence for a component match to survive filtering.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.85;

/// Default absolute tolerance in pixels for dimension value comparison.
pub const DEFAULT_VALUE_TOLERANCE: f64 = 0.5;

/// Default pixel base for rem/em conversion.
pub const DEFAULT_REM_BASE_PX: f64 = 16.0;

/// Default maximum recursion depth into component children.
pub const DEFAULT_MAX_NESTED_DEPTH: usize = 32;

/// Confidence assigned to a direct token-reference match.
pub const CONFIDENCE_REFERENCE: f64 = 1.0;

/// Confidence assigned to a semantic (alias-chain) match.
pub const CONFIDENCE_SEMANTIC: f64 = 0.95;

/// Confidence assigned to a partial path-suffix match.
pub const CONFIDENCE_PARTIAL: f64 = 0.9;

/// Confidence assigned to a raw value match.
pub const CONFIDENCE_VALUE: f64 = 0.7;

/// Confidence recorded for a composite token matched from its parts.
pub const CONFIDENCE_COMPOSITE: f64 = 0.95;
