//! Recognizer configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QSKETCH_ prefix)
//!
//! Environment variables take precedence over the file, which takes
//! precedence over the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::geometry::{DEFAULT_GRID_SIZE, DEFAULT_SNAP_THRESHOLD};

/// Grid and snapping parameters for recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Width of one time-column in pixels.
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,

    /// Distance within which a new wire joins an existing one while drawing.
    #[serde(default = "default_snap_threshold")]
    pub wire_snap_threshold: f64,

    /// Distance within which a gate stroke lands on a wire.
    #[serde(default = "default_snap_threshold")]
    pub gate_snap_threshold: f64,
}

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE
}

fn default_snap_threshold() -> f64 {
    DEFAULT_SNAP_THRESHOLD
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            wire_snap_threshold: default_snap_threshold(),
            gate_snap_threshold: default_snap_threshold(),
        }
    }
}

impl RecognizerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RecognizerConfig =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Load configuration with the following precedence:
    /// 1. Environment variable overrides
    /// 2. File, if provided
    /// 3. Defaults
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    fn merge_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup. Unset or unparsable variables
    /// leave the current value in place.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        if let Some(v) = read("QSKETCH_GRID_SIZE") {
            self.grid_size = v;
        }
        if let Some(v) = read("QSKETCH_WIRE_SNAP_THRESHOLD") {
            self.wire_snap_threshold = v;
        }
        if let Some(v) = read("QSKETCH_GATE_SNAP_THRESHOLD") {
            self.gate_snap_threshold = v;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "grid_size must be a positive number, got {}",
                self.grid_size
            )));
        }

        for (name, value) in [
            ("wire_snap_threshold", self.wire_snap_threshold),
            ("gate_snap_threshold", self.gate_snap_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert_eq!(config.grid_size, 40.0);
        assert_eq!(config.wire_snap_threshold, 20.0);
        assert_eq!(config.gate_snap_threshold, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = RecognizerConfig::from_yaml("grid_size: 50.0\n").unwrap();
        assert_eq!(config.grid_size, 50.0);
        assert_eq!(config.gate_snap_threshold, 20.0);
    }

    #[test]
    fn test_yaml_parse_error() {
        let err = RecognizerConfig::from_yaml("grid_size: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_grid_size() {
        let err = RecognizerConfig::from_yaml("grid_size: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_negative_threshold() {
        let config = RecognizerConfig {
            gate_snap_threshold: -1.0,
            ..RecognizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QSKETCH_GRID_SIZE", "32"),
            ("QSKETCH_GATE_SNAP_THRESHOLD", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = RecognizerConfig::default()
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()));
        assert_eq!(config.grid_size, 32.0);
        assert_eq!(config.gate_snap_threshold, 20.0);
    }

    #[test]
    fn test_missing_file() {
        let err = RecognizerConfig::from_file("/nonexistent/qsketch.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
