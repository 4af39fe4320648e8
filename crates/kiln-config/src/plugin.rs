//! Plugin handles and the registry that issues them.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Framework integrations known to [`PluginRegistry::builtin`], in registration order.
pub const BUILTIN_PLUGINS: [&str; 6] = ["sveltekit", "svelte", "astro", "mdx", "css", "tailwind"];

/// Opaque identifier issued by a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(usize);

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability handle for a registered plugin.
///
/// The handle only refers to the registration; the registry that issued the
/// [`PluginId`] owns the plugin itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginHandle {
    #[serde(skip)]
    id: PluginId,

    name: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    options: Value,
}

impl PluginHandle {
    pub fn id(&self) -> PluginId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin-specific options, `Value::Null` when none were given
    pub fn options(&self) -> &Value {
        &self.options
    }
}

/// Resolves plugin names to registrations
pub trait PluginResolver {
    fn resolve(&self, name: &str) -> Option<PluginId>;
}

impl<R: PluginResolver + ?Sized> PluginResolver for &R {
    fn resolve(&self, name: &str) -> Option<PluginId> {
        (**self).resolve(name)
    }
}

/// Insertion-ordered plugin registry
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    names: IndexSet<String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with [`BUILTIN_PLUGINS`]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_PLUGINS {
            registry.register(name);
        }
        registry
    }

    /// Register a plugin name, returning its id. Re-registering returns the existing id.
    pub fn register(&mut self, name: impl Into<String>) -> PluginId {
        let (index, _) = self.names.insert_full(name.into());
        PluginId(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PluginResolver for PluginRegistry {
    fn resolve(&self, name: &str) -> Option<PluginId> {
        self.names.get_index_of(name).map(PluginId)
    }
}

/// Object form of a plugin entry: `{ name = "sveltekit", options = { ... } }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSpec {
    name: String,

    #[serde(default)]
    options: Value,
}

/// Check the shape of a raw plugin entry and return its name and options.
pub(crate) fn parse_entry(index: usize, entry: &Value) -> Result<(String, Value)> {
    let (name, options) = match entry {
        Value::Null => return Err(ConfigError::invalid_plugin(index, "plugin entry is null")),
        Value::String(name) => (name.clone(), Value::Null),
        Value::Object(_) => {
            let spec: PluginSpec = serde_json::from_value(entry.clone())
                .map_err(|e| ConfigError::invalid_plugin(index, e.to_string()))?;
            (spec.name, spec.options)
        }
        other => {
            return Err(ConfigError::invalid_plugin(
                index,
                format!("expected a plugin name or table, found {}", kind_of(other)),
            ));
        }
    };

    if name.trim().is_empty() {
        return Err(ConfigError::invalid_plugin(index, "plugin name cannot be empty"));
    }

    Ok((name, options))
}

/// Turn raw plugin entries into handles, preserving order.
pub fn parse_plugins(entries: &[Value], resolver: &dyn PluginResolver) -> Result<Vec<PluginHandle>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (name, options) = parse_entry(index, entry)?;
            let id = resolver.resolve(&name).ok_or_else(|| {
                ConfigError::invalid_plugin(index, format!("unknown plugin '{name}'"))
            })?;
            Ok(PluginHandle { id, name, options })
        })
        .collect()
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_registry_keeps_registration_order() {
        let registry = PluginRegistry::builtin();
        assert_eq!(registry.names().collect::<Vec<_>>(), BUILTIN_PLUGINS.to_vec());
        assert_eq!(registry.resolve("sveltekit"), Some(PluginId(0)));
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = PluginRegistry::new();
        let first = registry.register("sveltekit");
        let second = registry.register("sveltekit");
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn parses_names_and_tables_in_order() {
        let registry = PluginRegistry::builtin();
        let entries = vec![
            json!("sveltekit"),
            json!({ "name": "tailwind", "options": { "config": "tailwind.config.js" } }),
        ];
        let plugins = parse_plugins(&entries, &registry).unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].name(), "sveltekit");
        assert!(plugins[0].options().is_null());
        assert_eq!(plugins[1].name(), "tailwind");
        assert_eq!(plugins[1].options()["config"], json!("tailwind.config.js"));
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let registry = PluginRegistry::builtin();
        let plugins = parse_plugins(&[json!("css"), json!("css")], &registry).unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].id(), plugins[1].id());
    }

    #[test]
    fn null_entry_is_invalid() {
        let registry = PluginRegistry::builtin();
        let err = parse_plugins(&[json!("sveltekit"), Value::Null], &registry).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugin { index: 1, .. }));
    }

    #[test]
    fn unknown_plugin_is_invalid() {
        let registry = PluginRegistry::builtin();
        let err = parse_plugins(&[json!("react-refresh")], &registry).unwrap_err();
        match err {
            ConfigError::InvalidPlugin { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("react-refresh"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_name_is_invalid() {
        let registry = PluginRegistry::builtin();
        assert!(parse_plugins(&[json!("  ")], &registry).is_err());
        assert!(parse_plugins(&[json!({ "name": "" })], &registry).is_err());
    }

    #[test]
    fn wrong_types_are_invalid() {
        let registry = PluginRegistry::builtin();
        for entry in [json!(42), json!(true), json!(["sveltekit"])] {
            let err = parse_plugins(&[entry], &registry).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPlugin { .. }));
        }
        let err = parse_plugins(&[json!({ "name": "css", "order": 1 })], &registry).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugin { .. }));
    }

    #[test]
    fn handle_serializes_without_id() {
        let registry = PluginRegistry::builtin();
        let plugins = parse_plugins(&[json!("sveltekit")], &registry).unwrap();
        assert_eq!(serde_json::to_value(&plugins[0]).unwrap(), json!({ "name": "sveltekit" }));
    }
}
