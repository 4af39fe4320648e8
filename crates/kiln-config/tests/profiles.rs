//! Tests for profile selection and merging.

use kiln_config::{ConfigDiscovery, ConfigError, ConfigInput, ConfigLoader, WorkerFormat};
use std::fs;
use tempfile::TempDir;

const PROFILED_TOML: &str = r#"
plugins = ["sveltekit"]

[server.fs]
strict = false

[worker]
format = "es"

[profiles.production.server]
fsStrict = true

[profiles.production.worker]
format = "iife"

[profiles.docs]
plugins = ["sveltekit", "mdx"]

[profiles.legacy.worker]
format = "umd"
"#;

fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("kiln.toml"), PROFILED_TOML).expect("write config");
    dir
}

#[test]
fn base_config_ignores_profiles() {
    let dir = project();
    let config = ConfigDiscovery::new(dir.path()).load().expect("load");

    assert!(!config.server().fs_strict);
    assert_eq!(config.worker().format, WorkerFormat::Es);
}

#[test]
fn profile_overrides_scalars() {
    let dir = project();
    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert!(config.server().fs_strict);
    assert_eq!(config.worker().format, WorkerFormat::Iife);
    assert_eq!(config.plugins()[0].name(), "sveltekit");
}

#[test]
fn profile_replaces_plugin_list() {
    let dir = project();
    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("docs")
        .expect("load with profile");

    let names: Vec<_> = config.plugins().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["sveltekit", "mdx"]);
    // untouched sections keep their base values
    assert_eq!(config.worker().format, WorkerFormat::Es);
}

#[test]
fn invalid_value_inside_profile_is_caught() {
    let dir = project();
    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("legacy")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFormat { ref value } if value == "umd"));
}

#[test]
fn unknown_profile_is_an_error() {
    let dir = project();
    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("staging")
        .unwrap_err();
    assert!(matches!(err, ConfigError::ProfileNotFound(ref name) if name == "staging"));
}

#[test]
fn profile_applies_after_overrides() {
    let dir = project();
    let config = ConfigLoader::new()
        .root(dir.path())
        .overrides(ConfigInput::new().worker_format("cjs"))
        .profile("production")
        .load()
        .expect("load");

    assert_eq!(config.worker().format, WorkerFormat::Iife);
}

#[test]
fn profiles_can_come_from_overrides() {
    let input = ConfigInput::from_value(serde_json::json!({
        "worker": { "format": "es" },
        "profiles": { "ci": { "server": { "fs": { "strict": false } } } }
    }))
    .expect("input");

    let config = ConfigLoader::new()
        .overrides(input)
        .profile("ci")
        .load()
        .expect("load");

    assert!(!config.server().fs_strict);
    assert_eq!(config.worker().format, WorkerFormat::Es);
}
