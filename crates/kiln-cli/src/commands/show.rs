//! Show command implementation.

use kiln_config::Configuration;
use serde_json::Value;

use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::utils;
use crate::error::Result;

/// Execute the show command: print the resolved configuration to stdout.
pub fn execute(args: ShowArgs) -> Result<()> {
    let config = utils::loader(&args.source)?.load()?;
    println!("{}", render(&config, args.output)?);
    Ok(())
}

/// Render the configuration in the requested format.
///
/// TOML has no null, so null plugin options are left out of TOML output.
/// Values TOML cannot hold at all (integers above `i64::MAX`) fail with
/// `CliError::Toml`.
pub fn render(config: &Configuration, format: OutputFormat) -> Result<String> {
    let value = config.to_value()?;
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&value)?,
        OutputFormat::Toml => toml::to_string_pretty(&strip_nulls(value))?,
    };
    Ok(rendered.trim_end().to_string())
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, strip_nulls(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}
