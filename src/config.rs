//! Validator options.
//!
//! Handles:
//! - Default escalation and stack-trace policy
//! - Loading options from a TOML file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading validator options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Policy applied to every logger a validator creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    /// Record warnings in the error stream
    pub treat_warnings_as_errors: bool,
    /// Render cause chains and backtraces for logged exceptions
    pub include_stack_trace: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            treat_warnings_as_errors: true,
            include_stack_trace: false,
        }
    }
}

impl ValidatorOptions {
    /// Parse options from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
