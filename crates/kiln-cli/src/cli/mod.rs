//! Command-line interface definition for kiln.
//!
//! # Command Structure
//!
//! - `kiln check` - Load and validate the configuration
//! - `kiln show` - Print the resolved configuration
//! - `kiln init` - Write a starter kiln.toml
//! - `kiln plugins` - List the built-in plugins

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ShowArgs, SourceArgs};
pub use enums::*;

/// kiln - build-tool configuration loader
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Inspect and validate build-tool configuration",
    long_about = "kiln loads kiln.toml (or the \"kiln\" field of package.json), applies\n\
                  KILN_* environment overrides and an optional profile, and validates\n\
                  the plugin list, dev-server options and worker output format."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows which configuration layers were applied and in what order.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
