//! kiln CLI - inspect and validate build-tool configuration.
//!
//! Thin command-line layer over [`kiln_config`]:
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `check`, `show`, `init` and `plugins`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
