//! Configuration input, the resolved `Configuration`, and profile merging.
//!
//! [`ConfigInput`] is the loose shape read from files, the environment, and
//! programmatic overrides. [`ConfigInput::resolve`] validates it against a
//! [`PluginResolver`] and produces the immutable [`Configuration`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result as ConfigResult};
use crate::plugin::{kind_of, parse_plugins, PluginHandle, PluginRegistry, PluginResolver};
use crate::server::{ServerInput, ServerOptions};
use crate::worker::{WorkerInput, WorkerOptions};

/// Resolved build-tool configuration.
///
/// Built once by the loader and never mutated afterwards; all access goes
/// through the getters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    plugins: Vec<PluginHandle>,
    server: ServerOptions,
    worker: WorkerOptions,
}

impl Configuration {
    /// Plugins in the order they were configured
    pub fn plugins(&self) -> &[PluginHandle] {
        &self.plugins
    }

    pub fn server(&self) -> &ServerOptions {
        &self.server
    }

    pub fn worker(&self) -> &WorkerOptions {
        &self.worker
    }

    /// Resolve a raw value against the built-in plugin registry.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{Configuration, WorkerFormat};
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({
    ///     "plugins": ["sveltekit"],
    ///     "server": { "fs": { "strict": false } },
    ///     "worker": { "format": "es" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.plugins()[0].name(), "sveltekit");
    /// assert!(!config.server().fs_strict);
    /// assert_eq!(config.worker().format, WorkerFormat::Es);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        ConfigInput::from_value(value)?.resolve(&PluginRegistry::builtin())
    }

    /// Convert to the serialized output contract
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }
}

/// Unresolved configuration. Every field is optional; missing fields take
/// their documented defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigInput {
    /// Raw plugin entries: a name string or a `{ name, options }` table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Value>>,

    #[serde(default)]
    pub server: ServerInput,

    #[serde(default)]
    pub worker: WorkerInput,

    /// Named overlays applied by [`ConfigInput::materialize_profile`]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl ConfigInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin by name
    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins
            .get_or_insert_with(Vec::new)
            .push(Value::String(name.into()));
        self
    }

    /// Append a plugin with options
    pub fn plugin_with(mut self, name: impl Into<String>, options: Value) -> Self {
        let mut entry = Map::new();
        entry.insert("name".to_string(), Value::String(name.into()));
        entry.insert("options".to_string(), options);
        self.plugins
            .get_or_insert_with(Vec::new)
            .push(Value::Object(entry));
        self
    }

    /// Set the plugin list to empty, overriding lower layers
    pub fn no_plugins(mut self) -> Self {
        self.plugins = Some(Vec::new());
        self
    }

    pub fn fs_strict(mut self, strict: bool) -> Self {
        self.server.fs_strict = Some(strict);
        self
    }

    pub fn worker_format(mut self, format: impl Into<String>) -> Self {
        self.worker.format = Some(Value::String(format.into()));
        self
    }

    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// Each top-level section is read on its own so a type error names the
    /// section it came from. Unknown keys are ignored.
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(ConfigError::invalid_value(
                    "config",
                    format!("expected a table at the top level, found {}", kind_of(&other)),
                ));
            }
        };

        Ok(Self {
            plugins: section(&mut root, "plugins")?,
            server: section(&mut root, "server")?.unwrap_or_default(),
            worker: section(&mut root, "worker")?.unwrap_or_default(),
            profiles: section(&mut root, "profiles")?.unwrap_or_default(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Validate and resolve into an immutable [`Configuration`].
    ///
    /// Fails on the first problem found; no partially resolved value is returned.
    pub fn resolve(&self, resolver: &dyn PluginResolver) -> ConfigResult<Configuration> {
        let plugins = parse_plugins(self.plugins.as_deref().unwrap_or_default(), resolver)?;
        let server = self.server.resolve()?;
        let worker = self.worker.resolve()?;

        Ok(Configuration {
            plugins,
            server,
            worker,
        })
    }

    /// Merge the named profile over this input.
    ///
    /// `None` returns the input unchanged. A name with no matching entry in
    /// `profiles` is an error.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let mut overlay = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overlay.is_null() {
            return Ok(self);
        }
        if !overlay.is_object() {
            return Err(ConfigError::invalid_value(
                format!("profiles.{name}"),
                "a profile must be a table",
            ));
        }
        canonicalize_layer(&mut overlay)?;

        let profiles = self.profiles.clone();
        let mut base = self.to_value()?;
        canonicalize_layer(&mut base)?;
        merge_values(&mut base, &overlay);

        let mut merged = Self::from_value(base)?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

/// Deserialize one top-level section. Missing and null sections are `None`.
fn section<T: DeserializeOwned>(root: &mut Map<String, Value>, key: &str) -> ConfigResult<Option<T>> {
    match root.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ConfigError::invalid_value(key, e.to_string())),
    }
}

/// Rewrite the server section of a single source layer to its canonical
/// `fsStrict` key so that layers using different spellings override each
/// other instead of conflicting.
pub(crate) fn canonicalize_layer(layer: &mut Value) -> ConfigResult<()> {
    let Some(server) = layer.get_mut("server") else {
        return Ok(());
    };
    if !server.is_object() {
        return Ok(());
    }

    let input: ServerInput = serde_json::from_value(server.clone())
        .map_err(|e| ConfigError::invalid_value("server", e.to_string()))?;

    let mut canonical = Map::new();
    if let Some(strict) = input.explicit_fs_strict()? {
        canonical.insert("fsStrict".to_string(), Value::Bool(strict));
    }
    *server = Value::Object(canonical);
    Ok(())
}

/// Deep-merge `update` into `target`. Objects merge key by key; arrays and
/// scalars are replaced.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
