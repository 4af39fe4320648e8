//! Command implementations for the kiln CLI.
//!
//! - [`check`] - Configuration validation
//! - [`show`] - Print the resolved configuration
//! - [`init`] - Starter kiln.toml
//! - [`plugins`] - Built-in plugin listing
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod init;
pub mod plugins;
pub mod show;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use plugins::execute as plugins_execute;
pub use show::execute as show_execute;
