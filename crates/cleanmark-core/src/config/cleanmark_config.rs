//! Top-level cleanmark configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, TimingConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CLEANMARK_*`)
/// 3. Project config (`cleanmark.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CleanmarkConfig {
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

/// Programmatic overrides, e.g. from an embedding application's flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub slow_scan_threshold_ms: Option<u64>,
    pub warn_on_clock_skew: Option<bool>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl CleanmarkConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

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
    pub fn validate(config: &CleanmarkConfig) -> Result<(), ConfigError> {
        if config.timing.slow_scan_threshold_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "timing.slow_scan_threshold_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref level) = config.logging.level {
            if !constants::VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!(
                        "unknown level '{level}', expected one of {}",
                        constants::VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CleanmarkConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CleanmarkConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut CleanmarkConfig, other: &CleanmarkConfig) {
        if other.timing.slow_scan_threshold_ms.is_some() {
            base.timing.slow_scan_threshold_ms = other.timing.slow_scan_threshold_ms;
        }
        if other.timing.warn_on_clock_skew.is_some() {
            base.timing.warn_on_clock_skew = other.timing.warn_on_clock_skew;
        }
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer is kept.
    fn apply_env_overrides(config: &mut CleanmarkConfig) {
        if let Ok(val) = std::env::var("CLEANMARK_TIMING_SLOW_SCAN_THRESHOLD_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.timing.slow_scan_threshold_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CLEANMARK_TIMING_WARN_ON_CLOCK_SKEW") {
            if let Ok(v) = val.parse::<bool>() {
                config.timing.warn_on_clock_skew = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CLEANMARK_LOG_LEVEL") {
            config.logging.level = Some(val.to_lowercase());
        }
        if let Ok(val) = std::env::var("CLEANMARK_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.json = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut CleanmarkConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.slow_scan_threshold_ms {
            config.timing.slow_scan_threshold_ms = Some(v);
        }
        if let Some(v) = overrides.warn_on_clock_skew {
            config.timing.warn_on_clock_skew = Some(v);
        }
        if let Some(ref level) = overrides.log_level {
            config.logging.level = Some(level.clone());
        }
        if let Some(v) = overrides.log_json {
            config.logging.json = Some(v);
        }
    }
}
