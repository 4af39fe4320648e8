//! kiln CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Show(show_args) => commands::show_execute(show_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Plugins => commands::plugins_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
