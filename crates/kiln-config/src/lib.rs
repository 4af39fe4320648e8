pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod plugin;
pub mod server;
pub mod validation;
pub mod worker;

// Re-export main types
pub use config::*;
pub use error::*;
pub use plugin::*;
pub use server::*;
pub use worker::*;

// Re-export loading, discovery and validation
pub use discovery::{
    discover, discover_with_profile, read_config_file, ConfigDiscovery, CONFIG_FILE,
    PACKAGE_JSON_FIELD,
};
pub use loader::{load, load_with, ConfigLoader, ENV_PREFIX, ENV_SEPARATOR};
pub use validation::{validate_schema, ConfigValidator, RegistryValidator, SchemaValidator};
