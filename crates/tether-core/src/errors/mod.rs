//! Error types for the Tether engine.
//!
//! One enum per subsystem, all `thiserror`-derived. Matching itself never
//! fails for data-shape reasons; these errors cover the configuration and
//! token-file I/O boundary only.

mod config_error;
mod token_error;

pub use config_error::ConfigError;
pub use token_error::TokenError;
