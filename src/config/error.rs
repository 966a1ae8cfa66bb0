//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("Config validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Build a validation error from collected messages.
    pub fn from_messages(messages: &[String]) -> Self {
        Self::Validation(messages.join("; "))
    }
}
