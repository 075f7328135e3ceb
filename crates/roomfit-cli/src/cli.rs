//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use roomfit_domain::Measurement;
use std::path::PathBuf;

/// Roomfit - Track furniture and check whether it fits a room.
#[derive(Debug, Parser)]
#[command(name = "roomfit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the furniture and archive files
    #[arg(short, long, global = true, env = "ROOMFIT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Fixed-width text rows
    Plain,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Plain => OutputFormat::Plain,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a piece of furniture
    Add(AddArgs),

    /// List active furniture
    List,

    /// Move an active item into the archive
    Archive(ArchiveArgs),

    /// List archived furniture
    Archived,

    /// Check which active furniture fits a room
    Fit(FitArgs),

    /// Enter the interactive menu (default)
    Shell,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Furniture name
    pub name: String,

    /// Length as FEET,INCHES (e.g. 6,3)
    #[arg(short, long)]
    pub length: Measurement,

    /// Width as FEET,INCHES
    #[arg(short, long)]
    pub width: Measurement,

    /// Height as FEET,INCHES
    #[arg(short = 'H', long)]
    pub height: Measurement,
}

/// Arguments for the archive command.
#[derive(Debug, Parser)]
pub struct ArchiveArgs {
    /// Zero-based index in the active list
    pub index: usize,
}

/// Arguments for the fit command.
#[derive(Debug, Parser)]
pub struct FitArgs {
    /// Room length as FEET,INCHES
    #[arg(short, long)]
    pub length: Measurement,

    /// Room width as FEET,INCHES
    #[arg(short, long)]
    pub width: Measurement,

    /// Room height as FEET,INCHES (shown only)
    #[arg(short = 'H', long)]
    pub height: Option<Measurement>,
}
