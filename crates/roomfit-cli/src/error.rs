//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inventory operation rejected
    #[error("{0}")]
    Inventory(#[from] roomfit_store::InventoryError),

    /// Invalid furniture record
    #[error("Invalid furniture: {0}")]
    Furniture(#[from] roomfit_domain::FurnitureError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor failure
    #[error("Input error: {0}")]
    Readline(String),

    /// Input stream closed (Ctrl-D or end of piped input)
    #[error("Input closed")]
    InputClosed,

    /// One or both data files failed to save
    #[error("Failed to save {0} data file(s)")]
    SaveFailed(usize),
}
