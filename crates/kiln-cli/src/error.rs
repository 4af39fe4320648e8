//! Error handling for the kiln CLI.
//!
//! Library errors arrive as [`kiln_config::ConfigError`] and are wrapped in
//! [`CliError`]. `main` turns the final error into a miette report.

use std::path::PathBuf;

use kiln_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Refusing to overwrite an existing file
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Suggestion shown under the error message, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Config(ConfigError::InvalidFormat { .. }) => {
                Some("worker.format must be one of: es, iife, cjs")
            }
            CliError::Config(ConfigError::InvalidPlugin { .. }) => {
                Some("run 'kiln plugins' to list the plugins kiln knows about")
            }
            CliError::Config(ConfigError::ProfileNotFound(_)) => {
                Some("profiles are defined under [profiles.<name>] in kiln.toml")
            }
            CliError::Config(ConfigError::NotFound) => {
                Some("create one with 'kiln init' or pass --config <FILE>")
            }
            CliError::AlreadyExists(_) => Some("pass --force to overwrite it"),
            CliError::Toml(_) => Some("TOML cannot represent this value; use '--output json' instead"),
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error into a miette report for display
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    let kind = match &err {
        CliError::Config(_) => "Configuration error",
        CliError::AlreadyExists(_) => "Init error",
        CliError::Io(_) | CliError::Json(_) | CliError::Toml(_) => "Error",
    };

    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{kind}: {err}"),
        None => miette::miette!("{kind}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::ProfileNotFound("prod".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.to_string(), "profile 'prod' is not defined");
    }

    #[test]
    fn format_errors_carry_a_hint() {
        let err: CliError = ConfigError::InvalidFormat {
            value: "umd2".to_string(),
        }
        .into();
        assert!(err.hint().unwrap().contains("es, iife, cjs"));
    }

    #[test]
    fn io_errors_have_no_hint() {
        let err: CliError = std::io::Error::other("disk full").into();
        assert!(err.hint().is_none());
    }

    #[test]
    fn miette_report_includes_kind() {
        let report = cli_error_to_miette(CliError::AlreadyExists(PathBuf::from("kiln.toml")));
        assert_eq!(report.to_string(), "Init error: kiln.toml already exists");
    }
}
