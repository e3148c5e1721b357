//! Core types, errors, configuration, and constants for the Tether
//! token-matching engine.
//!
//! Everything here is shared by the higher layers: `tether-tokens`
//! (token model, parsing, alias resolution) and `tether-analysis`
//! (component matching, aggregation, usage analysis).

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{MatchingConfig, TetherConfig};
pub use errors::{ConfigError, TokenError};
pub use types::confidence::Confidence;
pub use types::{FxHashMap, FxHashSet};
