//! Syndicate CLI library.
//!
//! Configuration handling, record loading, command execution and output
//! formatting for the `syndicate` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod records;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
