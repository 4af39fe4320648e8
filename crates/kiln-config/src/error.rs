//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Validation errors
    #[error("invalid worker format '{value}' (expected one of: es, iife, cjs)")]
    InvalidFormat { value: String },

    #[error("invalid plugin at index {index}: {reason}")]
    InvalidPlugin { index: usize, reason: String },

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    // Config file errors
    #[error("config not found")]
    NotFound,

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_value(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }

    pub(crate) fn invalid_plugin(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPlugin {
            index,
            reason: reason.into(),
        }
    }
}
