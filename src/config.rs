//! Optional YAML configuration for the CLI.
//!
//! Everything has a default; a missing config file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::DEFAULT_LOOKBACK;

/// Config file names searched in the working directory.
const DEFAULT_CONFIG_NAMES: &[&str] = &["snagcheck.yaml", ".snagcheck.yaml"];

/// Output formats accepted by `format`.
const VALID_FORMATS: &[&str] = &["pretty", "json"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Output format: "pretty" or "json".
    #[serde(default = "default_format")]
    pub format: String,
    /// Lines searched backwards for array declarations.
    #[serde(default = "default_lookback")]
    pub lookback: usize,
    /// Exit non-zero when findings are reported.
    #[serde(default)]
    pub fail_on_findings: bool,
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: default_format(),
            lookback: default_lookback(),
            fail_on_findings: false,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown format {:?}, must be one of {}",
                self.format,
                VALID_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Discover a config file in the current directory.
pub fn discover() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .copied()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
