//! Development server options.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Resolved development server options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    /// Restrict filesystem reads to the project root
    pub fs_strict: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            fs_strict: default_fs_strict(),
        }
    }
}

/// Unresolved server options.
///
/// Accepts both the flat `fsStrict` key and the nested `fs.strict` form:
///
/// ```toml
/// [server.fs]
/// strict = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInput {
    #[serde(default, alias = "fs_strict", skip_serializing_if = "Option::is_none")]
    pub fs_strict: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fs: Option<FsInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl ServerInput {
    /// The explicitly configured strictness, if any.
    pub(crate) fn explicit_fs_strict(&self) -> Result<Option<bool>, ConfigError> {
        let nested = self.fs.as_ref().and_then(|fs| fs.strict);
        match (self.fs_strict, nested) {
            (Some(flat), Some(nested)) if flat != nested => Err(ConfigError::invalid_value(
                "server.fsStrict",
                format!("conflicts with server.fs.strict ({flat} vs {nested}); set only one"),
            )),
            (flat, nested) => Ok(flat.or(nested)),
        }
    }

    pub(crate) fn resolve(&self) -> Result<ServerOptions, ConfigError> {
        Ok(ServerOptions {
            fs_strict: self.explicit_fs_strict()?.unwrap_or_else(default_fs_strict),
        })
    }
}

fn default_fs_strict() -> bool {
    true
}
