//! Layered configuration loading.
//!
//! Sources are merged with figment, lowest priority first:
//! defaults < config file < environment < programmatic overrides.
//! The selected profile is merged over the result, then everything is
//! validated and resolved into a [`Configuration`].

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{canonicalize_layer, ConfigInput, Configuration};
use crate::discovery::{read_config_file, ConfigDiscovery};
use crate::error::{ConfigError, Result};
use crate::plugin::{PluginRegistry, PluginResolver};

/// Default prefix for environment overrides (`KILN_WORKER__FORMAT=es`)
pub const ENV_PREFIX: &str = "KILN_";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Load the default configuration.
///
/// No files or environment variables are read.
pub fn load() -> Result<Configuration> {
    ConfigLoader::new().load()
}

/// Load with explicit overrides on top of the defaults.
///
/// # Example
///
/// ```
/// use kiln_config::{load_with, ConfigInput, WorkerFormat};
///
/// let config = load_with(
///     ConfigInput::new()
///         .plugin("sveltekit")
///         .fs_strict(false)
///         .worker_format("es"),
/// )
/// .unwrap();
///
/// assert_eq!(config.plugins().len(), 1);
/// assert!(!config.server().fs_strict);
/// assert_eq!(config.worker().format, WorkerFormat::Es);
/// ```
pub fn load_with(overrides: ConfigInput) -> Result<Configuration> {
    ConfigLoader::new().overrides(overrides).load()
}

/// Builder for a layered configuration load
pub struct ConfigLoader {
    root: Option<PathBuf>,
    file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Option<ConfigInput>,
    profile: Option<String>,
    resolver: Box<dyn PluginResolver + Send + Sync>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            root: None,
            file: None,
            env_prefix: None,
            overrides: None,
            profile: None,
            resolver: Box::new(PluginRegistry::builtin()),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover a config file in `root` (see [`ConfigDiscovery`])
    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Use an explicit config file instead of discovery
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read overrides from `KILN_*` environment variables
    pub fn with_env(self) -> Self {
        self.env_prefix(ENV_PREFIX)
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn overrides(mut self, overrides: ConfigInput) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Resolve plugin names with a custom registry
    pub fn resolver(mut self, resolver: impl PluginResolver + Send + Sync + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Gather all layers into one unresolved input with the profile applied.
    pub fn input(&self) -> Result<ConfigInput> {
        let mut figment = Figment::new();

        if let Some(document) = self.file_layer()? {
            figment = figment.merge(Serialized::defaults(document));
        }

        if let Some(prefix) = &self.env_prefix {
            let mut env: Value = Figment::from(Env::prefixed(prefix).split(ENV_SEPARATOR))
                .extract()
                .map_err(|e| ConfigError::invalid_value("environment", e.to_string()))?;
            canonicalize_layer(&mut env)?;
            debug!(prefix = %prefix, "applied environment layer");
            figment = figment.merge(Serialized::defaults(env));
        }

        if let Some(overrides) = &self.overrides {
            let mut value = overrides.to_value()?;
            canonicalize_layer(&mut value)?;
            debug!("applied programmatic overrides");
            figment = figment.merge(Serialized::defaults(value));
        }

        let merged: Value = figment
            .extract()
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))?;

        let input = ConfigInput::from_value(merged)?;
        if let Some(profile) = &self.profile {
            debug!(profile = %profile, "applying profile");
        }
        input.materialize_profile(self.profile.as_deref())
    }

    /// Load, validate, and resolve the configuration.
    pub fn load(&self) -> Result<Configuration> {
        let config = self.input()?.resolve(self.resolver.as_ref())?;
        info!(
            plugins = config.plugins().len(),
            fs_strict = config.server().fs_strict,
            worker_format = %config.worker().format,
            "configuration resolved"
        );
        Ok(config)
    }

    fn file_layer(&self) -> Result<Option<Value>> {
        let path = match (&self.file, &self.root) {
            (Some(file), _) => Some(file.clone()),
            (None, Some(root)) => ConfigDiscovery::new(root).find(),
            (None, None) => None,
        };

        let Some(path) = path else {
            if let Some(root) = &self.root {
                debug!(root = %root.display(), "no config file found, using defaults");
            }
            return Ok(None);
        };

        let mut document = read_config_file(&path)?;
        if !document.is_object() {
            return Err(ConfigError::invalid_value(
                "config",
                format!("{} must contain a table at the top level", path.display()),
            ));
        }
        canonicalize_layer(&mut document)?;
        debug!(path = %path.display(), "applied config file layer");
        Ok(Some(document))
    }
}
