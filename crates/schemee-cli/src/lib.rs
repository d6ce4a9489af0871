//! Schemee CLI library.
//!
//! This library provides the core functionality for the Schemee command-line interface,
//! including configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use schemee_sdk::{FileStore, Schemee};

/// Facade used by every command: blueprints live on disk between invocations.
pub type Registry = Schemee<FileStore>;
