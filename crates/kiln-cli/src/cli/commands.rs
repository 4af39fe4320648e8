use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::OutputFormat;

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate configuration
    ///
    /// Loads the configuration from every enabled source and reports the
    /// resolved plugin list, server options and worker format.
    Check(CheckArgs),

    /// Print the resolved configuration
    ///
    /// Writes the fully resolved configuration to stdout, with every default
    /// filled in.
    Show(ShowArgs),

    /// Create a starter kiln.toml
    Init(InitArgs),

    /// List built-in plugins
    Plugins,
}

/// Where to read configuration from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Project root to search for kiln.toml or package.json
    ///
    /// Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Explicit configuration file (.toml or .json)
    ///
    /// Skips discovery. package.json files contribute their "kiln" field.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile to merge over the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Ignore KILN_* environment variables
    #[arg(long)]
    pub no_env: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only check the shape of the configuration
    ///
    /// Plugin names are not looked up in the built-in registry, so configs
    /// using third-party plugins can still be checked.
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write kiln.toml into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing kiln.toml
    #[arg(short, long)]
    pub force: bool,
}
