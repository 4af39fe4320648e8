//! Pluggable config validation strategies
//!
//! Separates shape checks (no registry needed) from plugin resolution checks.
//! Both work on an unresolved [`ConfigInput`] and never build a `Configuration`.

use crate::config::ConfigInput;
use crate::error::{ConfigError, Result};
use crate::plugin::{parse_entry, PluginResolver};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, input: &ConfigInput) -> Result<()>;
}

/// Schema-only validation
///
/// Checks plugin entry shapes, the worker format, and server option
/// consistency. Plugin names are not looked up, so configs that use plugins
/// from a registry unknown to this process still pass.
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigInput, ConfigValidator, SchemaValidator};
///
/// let input = ConfigInput::new().plugin("vite-plugin-pwa").worker_format("es");
/// SchemaValidator.validate(&input).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, input: &ConfigInput) -> Result<()> {
        for (index, entry) in input.plugins.iter().flatten().enumerate() {
            parse_entry(index, entry)?;
        }

        input.server.explicit_fs_strict()?;

        input.worker.parsed_format()?;

        for (name, profile) in &input.profiles {
            if !(profile.is_object() || profile.is_null()) {
                return Err(ConfigError::invalid_value(
                    format!("profiles.{name}"),
                    "a profile must be a table",
                ));
            }
        }

        Ok(())
    }
}

/// Schema validation plus plugin resolution
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigInput, ConfigValidator, PluginRegistry, RegistryValidator};
///
/// let validator = RegistryValidator::new(PluginRegistry::builtin());
/// assert!(validator.validate(&ConfigInput::new().plugin("sveltekit")).is_ok());
/// assert!(validator.validate(&ConfigInput::new().plugin("left-pad")).is_err());
/// ```
pub struct RegistryValidator<R> {
    resolver: R,
}

impl<R: PluginResolver> RegistryValidator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: PluginResolver> ConfigValidator for RegistryValidator<R> {
    fn validate(&self, input: &ConfigInput) -> Result<()> {
        SchemaValidator.validate(input)?;

        for (index, entry) in input.plugins.iter().flatten().enumerate() {
            let (name, _) = parse_entry(index, entry)?;
            if self.resolver.resolve(&name).is_none() {
                return Err(ConfigError::invalid_plugin(
                    index,
                    format!("unknown plugin '{name}'"),
                ));
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(input: &ConfigInput) -> Result<()> {
    SchemaValidator.validate(input)
}
