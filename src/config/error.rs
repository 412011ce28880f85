//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building settings from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key was absent from the configuration mapping.
    #[error("missing required configuration key: {0}")]
    MissingKey(String),

    /// A key was present but held a value of the wrong type.
    #[error("configuration key '{key}' is not a {expected}")]
    WrongType { key: String, expected: &'static str },

    /// Failed to read a configuration file.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create a `MissingKey` error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Create a `WrongType` error.
    pub fn wrong_type(key: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            key: key.into(),
            expected,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
