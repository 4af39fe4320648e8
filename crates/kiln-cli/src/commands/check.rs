//! Check command implementation.
//!
//! Loads the configuration from every enabled source and validates it
//! without printing the full document.

use kiln_config::{ConfigValidator, Configuration, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Locate the config source (explicit file, kiln.toml, package.json)
/// 2. Merge file, environment and profile layers
/// 3. Validate shape, and unless `--schema-only`, resolve every plugin
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    ui::info(&format!("Source: {}", utils::describe_source(&args.source)?));

    let loader = utils::loader(&args.source)?;

    if args.schema_only {
        let input = loader.input()?;
        SchemaValidator.validate(&input)?;
        ui::success("Configuration shape is valid (plugin names not checked)");
        return Ok(());
    }

    let config = loader.load()?;
    ui::success("Configuration is valid!");
    report(&config);
    Ok(())
}

fn report(config: &Configuration) {
    let plugins = if config.plugins().is_empty() {
        "(none)".to_string()
    } else {
        config
            .plugins()
            .iter()
            .map(|plugin| plugin.name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    ui::info(&format!("  plugins:         {plugins}"));
    ui::info(&format!("  server.fsStrict: {}", config.server().fs_strict));
    ui::info(&format!("  worker.format:   {}", config.worker().format));

    if !config.server().fs_strict {
        ui::warning("server.fsStrict is off: the dev server may serve files outside the project root");
    }
}
