//! Top-level Tether configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MatchingConfig;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TETHER_*`)
/// 2. Project config (`tether.toml` in project root)
/// 3. User config (`~/.tether/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TetherConfig {
    pub matching: MatchingConfig,
}

impl TetherConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`TETHER_*`)
    /// 2. Project config (`tether.toml` in `root`)
    /// 3. User config (`~/.tether/config.toml`)
    /// 4. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 2: project config
        let project_config_path = root.join("tether.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TetherConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.matching.min_confidence {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.min_confidence".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.matching.value_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.value_tolerance".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if let Some(base) = config.matching.rem_base_px {
            if !base.is_finite() || base <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.rem_base_px".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(depth) = config.matching.max_nested_depth {
            if depth == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.max_nested_depth".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tether/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TetherConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: TetherConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut TetherConfig, other: &TetherConfig) {
        if other.matching.min_confidence.is_some() {
            base.matching.min_confidence = other.matching.min_confidence;
        }
        if other.matching.value_tolerance.is_some() {
            base.matching.value_tolerance = other.matching.value_tolerance;
        }
        if other.matching.rem_base_px.is_some() {
            base.matching.rem_base_px = other.matching.rem_base_px;
        }
        if other.matching.max_nested_depth.is_some() {
            base.matching.max_nested_depth = other.matching.max_nested_depth;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TETHER_MATCHING_MIN_CONFIDENCE`, `TETHER_MATCHING_VALUE_TOLERANCE`, etc.
    fn apply_env_overrides(config: &mut TetherConfig) {
        if let Ok(val) = std::env::var("TETHER_MATCHING_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.min_confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TETHER_MATCHING_VALUE_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.value_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TETHER_MATCHING_REM_BASE_PX") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.rem_base_px = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TETHER_MATCHING_MAX_NESTED_DEPTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.matching.max_nested_depth = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level tether config directory: `~/.tether/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".tether"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
