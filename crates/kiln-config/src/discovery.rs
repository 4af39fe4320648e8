//! File-based config discovery for CLI use
//!
//! Handles finding and reading kiln configuration files from the filesystem.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Configuration;
use crate::error::{ConfigError, Result};
use crate::loader::ConfigLoader;

/// Name of the standalone config file
pub const CONFIG_FILE: &str = "kiln.toml";

/// Field holding the config inside `package.json`
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// File-based configuration discovery
///
/// Searches for kiln configuration files in conventional locations and reads them.
/// Library users should prefer [`ConfigLoader`] or `ConfigInput` directly.
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            let has_field = fs::read_to_string(&pkg_path)
                .ok()
                .and_then(|content| serde_json::from_str::<Value>(&content).ok())
                .is_some_and(|parsed| {
                    parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                });
            if has_field {
                return Some(pkg_path);
            }
        }

        None
    }

    /// Read the discovered config document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn read(&self) -> Result<Value> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        read_config_file(&path)
    }

    /// Load and resolve the discovered config (file layer only)
    pub fn load(&self) -> Result<Configuration> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        ConfigLoader::new().file(path).load()
    }

    /// Load with a profile applied
    pub fn load_with_profile(&self, profile: &str) -> Result<Configuration> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        ConfigLoader::new().file(path).profile(profile).load()
    }
}

/// Read a config file into a JSON value.
///
/// `.toml` files are parsed as TOML. `package.json` contributes its `kiln`
/// field; any other `.json` file is taken whole.
pub fn read_config_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => {
            let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            serde_json::to_value(toml_val).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: format!("TOML to JSON conversion failed: {e}"),
            })
        }
        Some("json") => {
            let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            if path.file_name() == Some(OsStr::new("package.json")) {
                extract_package_field(parsed)
            } else {
                Ok(parsed)
            }
        }
        other => Err(ConfigError::invalid_value(
            "config file",
            format!(
                "unsupported extension {:?} for {} (use .toml or .json)",
                other.unwrap_or(""),
                path.display()
            ),
        )),
    }
}

fn extract_package_field(mut parsed: Value) -> Result<Value> {
    let field = parsed
        .get_mut(PACKAGE_JSON_FIELD)
        .map(Value::take)
        .ok_or_else(|| {
            ConfigError::invalid_value(
                PACKAGE_JSON_FIELD,
                "add a 'kiln' field to your package.json",
            )
        })?;

    if field.is_null() {
        return Err(ConfigError::invalid_value(
            PACKAGE_JSON_FIELD,
            "the 'kiln' field cannot be null",
        ));
    }

    Ok(field)
}

/// Discover and load config from current directory, with environment overrides
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<Configuration> {
    let root = std::env::current_dir()?;
    ConfigLoader::new().root(root).with_env().load()
}

/// Discover and load config with profile (convenience function)
pub fn discover_with_profile(profile: &str) -> Result<Configuration> {
    let root = std::env::current_dir()?;
    ConfigLoader::new()
        .root(root)
        .with_env()
        .profile(profile)
        .load()
}
