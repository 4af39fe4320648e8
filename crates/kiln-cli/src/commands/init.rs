//! Init command implementation.
//!
//! Writes a starter kiln.toml for a SvelteKit project.

use std::fs;
use std::path::{Path, PathBuf};

use kiln_config::{ConfigLoader, CONFIG_FILE};

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Starter configuration written by `kiln init`
pub const STARTER_CONFIG: &str = r#"# kiln configuration
# Plugins run in the order listed.
plugins = ["sveltekit"]

[server.fs]
# Allow the dev server to read files outside the project root.
strict = false

[worker]
# Module format for worker bundles: "es", "iife" or "cjs".
format = "es"
"#;

/// Execute the init command.
///
/// # Errors
///
/// Returns `CliError::AlreadyExists` when kiln.toml exists and `--force`
/// was not given.
pub fn execute(args: InitArgs) -> Result<()> {
    let path = write_starter(&args.dir, args.force)?;

    // The template must always load; fail loudly if it ever drifts.
    ConfigLoader::new().file(&path).load()?;

    ui::success(&format!("Created {}", path.display()));
    ui::info("Run 'kiln check' to validate it");
    Ok(())
}

fn write_starter(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::create_dir_all(dir)?;
    fs::write(&path, STARTER_CONFIG)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::WorkerFormat;
    use tempfile::TempDir;

    #[test]
    fn starter_config_matches_reference_setup() {
        let dir = TempDir::new().unwrap();
        let path = write_starter(dir.path(), false).unwrap();

        let config = ConfigLoader::new().file(&path).load().unwrap();
        assert_eq!(config.plugins()[0].name(), "sveltekit");
        assert!(!config.server().fs_strict);
        assert_eq!(config.worker().format, WorkerFormat::Es);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "# mine\n").unwrap();

        let err = write_starter(dir.path(), false).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(), "# mine\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "# mine\n").unwrap();

        write_starter(dir.path(), true).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            STARTER_CONFIG
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("apps/web");
        let path = write_starter(&nested, false).unwrap();
        assert!(path.is_file());
    }
}
