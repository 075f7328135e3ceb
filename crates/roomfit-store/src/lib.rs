//! Roomfit Storage Layer
//!
//! Holds the in-memory inventory (active list plus bounded archive) and
//! persists both collections as line-oriented text files.
//!
//! # Architecture
//!
//! - [`Inventory`] owns the active list and the [`Archive`]
//! - [`FileStore`] reads and writes `furniture.txt` and `archived_furniture.txt`
//! - Each file is an independent failure domain on load and on save
//!
//! # Examples
//!
//! ```no_run
//! use roomfit_store::FileStore;
//!
//! let mut store = FileStore::new("data");
//! let outcome = store.load();
//! for problem in &outcome.problems {
//!     eprintln!("{problem}");
//! }
//! let inventory = outcome.inventory;
//! ```

#![warn(missing_docs)]

pub mod inventory;
pub mod persistence;

use roomfit_domain::FurnitureError;
use std::path::PathBuf;
use thiserror::Error;

pub use inventory::{Archive, Inventory, InventoryError, ARCHIVE_CAPACITY};
pub use persistence::{FileStore, LoadOutcome, SaveOutcome, ARCHIVE_FILE, FURNITURE_FILE};

/// Errors that can occur while loading or saving the data files
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, writing or renaming a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line could not be decoded and was skipped
    #[error("skipped malformed line {line} in {}: {source}", .path.display())]
    MalformedLine {
        /// File containing the line
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Decode error
        #[source]
        source: FurnitureError,
    },

    /// A line held bytes that are not valid UTF-8; they were replaced
    #[error("line {line} in {} is not valid UTF-8; invalid bytes were replaced", .path.display())]
    InvalidUtf8 {
        /// File containing the line
        path: PathBuf,
        /// 1-based line number
        line: usize,
    },

    /// Save refused because the existing file could not be read at load time
    #[error("not saving {}: the existing file could not be read", .path.display())]
    Unreadable {
        /// File that was left untouched
        path: PathBuf,
    },

    /// Archive file held more records than the archive can contain
    #[error("{} holds more than the archive capacity; moved {moved} record(s) to the active list", .path.display())]
    ArchiveOverflow {
        /// Archive file path
        path: PathBuf,
        /// Number of records moved to the active list
        moved: usize,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
