//! Helpers shared by the commands.

use std::path::PathBuf;

use kiln_config::{ConfigDiscovery, ConfigLoader};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::error::Result;

/// Project root from `--root`, falling back to the current directory.
pub(crate) fn project_root(source: &SourceArgs) -> Result<PathBuf> {
    match &source.root {
        Some(root) => Ok(root.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Build a loader for the sources selected on the command line.
pub(crate) fn loader(source: &SourceArgs) -> Result<ConfigLoader> {
    let root = project_root(source)?;
    let mut loader = ConfigLoader::new().root(&root);

    if let Some(file) = &source.config {
        let file = if file.is_relative() { root.join(file) } else { file.clone() };
        debug!(file = %file.display(), "using explicit config file");
        loader = loader.file(file);
    }

    if !source.no_env {
        loader = loader.with_env();
    }

    if let Some(profile) = &source.profile {
        loader = loader.profile(profile);
    }

    Ok(loader)
}

/// Describe where the configuration came from, for status output.
pub(crate) fn describe_source(source: &SourceArgs) -> Result<String> {
    let root = project_root(source)?;
    let origin = match &source.config {
        Some(file) => file.display().to_string(),
        None => match ConfigDiscovery::new(&root).find() {
            Some(found) => found.display().to_string(),
            None => "defaults (no kiln.toml or package.json#kiln found)".to_string(),
        },
    };
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(root: &std::path::Path) -> SourceArgs {
        SourceArgs {
            root: Some(root.to_path_buf()),
            no_env: true,
            ..SourceArgs::default()
        }
    }

    #[test]
    fn relative_config_is_resolved_against_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alt.toml"), "[worker]\nformat = \"cjs\"\n").unwrap();

        let args = SourceArgs {
            config: Some(PathBuf::from("alt.toml")),
            ..source(dir.path())
        };
        let config = loader(&args).unwrap().load().unwrap();
        assert_eq!(config.worker().format.as_str(), "cjs");
    }

    #[test]
    fn loader_leaves_discovery_to_config_loader() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kiln.toml"), "[worker]\nformat = \"es\"\n").unwrap();

        let config = loader(&source(dir.path())).unwrap().load().unwrap();
        assert_eq!(config.worker().format.as_str(), "es");
    }

    #[test]
    fn describe_source_reports_defaults() {
        let dir = TempDir::new().unwrap();
        let origin = describe_source(&source(dir.path())).unwrap();
        assert!(origin.starts_with("defaults"));
    }

    #[test]
    fn describe_source_reports_discovered_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kiln.toml"), "").unwrap();
        let origin = describe_source(&source(dir.path())).unwrap();
        assert!(origin.ends_with("kiln.toml"));
    }
}
