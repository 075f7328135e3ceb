//! Roomfit CLI library.
//!
//! This library provides the interactive menu shell, the one-shot
//! subcommands, configuration management and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod shell;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use shell::{EditorSource, LineSource, Shell};
