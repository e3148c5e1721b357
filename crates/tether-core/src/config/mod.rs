//! Configuration system for Tether.
//! TOML-based, 3-layer resolution: env > project > user > defaults.

pub mod matching_config;
pub mod tether_config;

pub use matching_config::MatchingConfig;
pub use tether_config::TetherConfig;
