//! Worker bundle options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Module format used when compiling worker bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerFormat {
    /// ECMAScript module workers (`new Worker(url, { type: "module" })`)
    Es,
    /// Classic script workers wrapped in an immediately invoked function (build tool default)
    #[default]
    Iife,
    /// CommonJS
    Cjs,
}

impl WorkerFormat {
    pub const ALL: [WorkerFormat; 3] = [WorkerFormat::Es, WorkerFormat::Iife, WorkerFormat::Cjs];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkerFormat::Es => "es",
            WorkerFormat::Iife => "iife",
            WorkerFormat::Cjs => "cjs",
        }
    }
}

impl FromStr for WorkerFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "es" => Ok(WorkerFormat::Es),
            "iife" => Ok(WorkerFormat::Iife),
            "cjs" => Ok(WorkerFormat::Cjs),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WorkerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved worker options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkerOptions {
    pub format: WorkerFormat,
}

/// Unresolved worker options as they appear in a config source
///
/// `format` is kept as a raw value: environment variables arrive type-inferred,
/// so `KILN_WORKER__FORMAT=1` is an integer and must still be reported as an
/// unknown format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Value>,
}

impl WorkerInput {
    /// Parse the raw format, if one was given.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidFormat` for unknown names and for non-string values.
    pub fn parsed_format(&self) -> Result<Option<WorkerFormat>, ConfigError> {
        match &self.format {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => raw.parse().map(Some),
            Some(other) => Err(ConfigError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }

    pub(crate) fn resolve(&self) -> Result<WorkerOptions, ConfigError> {
        let format = self.parsed_format()?.unwrap_or_default();
        Ok(WorkerOptions { format })
    }
}
