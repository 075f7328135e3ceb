//! Text-file persistence for the active list and the archive.
//!
//! One record per line in the `name|L|W|H` format. Blank lines are ignored,
//! malformed lines are skipped and reported, and a missing file is an empty
//! collection. Bytes that are not valid UTF-8 are replaced and the line is
//! still decoded. Saves go through a temp file in the data directory that is
//! renamed over the target, so a failed save leaves the previous file intact.
//! A file that existed but could not be read is never overwritten by the same
//! store.

use crate::inventory::{Archive, Inventory};
use crate::StoreError;
use roomfit_domain::Furniture;
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the active list.
pub const FURNITURE_FILE: &str = "furniture.txt";

/// File name of the archive.
pub const ARCHIVE_FILE: &str = "archived_furniture.txt";

/// Result of [`FileStore::load`]
///
/// Loading never fails outright; anything that went wrong is listed in
/// `problems` and the affected collection is left empty or partial.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Loaded inventory
    pub inventory: Inventory,
    /// Recoverable problems encountered while loading
    pub problems: Vec<StoreError>,
}

impl LoadOutcome {
    /// True when both files loaded without any problem
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Result of [`FileStore::save`], one independent result per file
#[derive(Debug)]
pub struct SaveOutcome {
    /// Records written to the active list file
    pub active: Result<usize, StoreError>,
    /// Records written to the archive file
    pub archive: Result<usize, StoreError>,
}

impl SaveOutcome {
    /// True when both files were written
    pub fn is_ok(&self) -> bool {
        self.active.is_ok() && self.archive.is_ok()
    }

    /// Errors from whichever writes failed
    pub fn errors(&self) -> impl Iterator<Item = &StoreError> {
        [&self.active, &self.archive]
            .into_iter()
            .filter_map(|result| result.as_ref().err())
    }
}

/// Reads and writes the two data files inside one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
    unreadable: Vec<PathBuf>,
}

impl FileStore {
    /// Store rooted at `data_dir`; nothing touches the disk until load or save
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            unreadable: Vec::new(),
        }
    }

    /// Data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of `furniture.txt`
    pub fn furniture_path(&self) -> PathBuf {
        self.data_dir.join(FURNITURE_FILE)
    }

    /// Path of `archived_furniture.txt`
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(ARCHIVE_FILE)
    }

    /// Create the data directory if it does not exist
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))
    }

    /// Load both collections
    ///
    /// A file that exists but cannot be read is remembered, and later saves
    /// through this store leave it untouched.
    pub fn load(&mut self) -> LoadOutcome {
        let mut problems = Vec::new();
        self.unreadable.clear();

        if let Err(e) = self.ensure_dir() {
            tracing::warn!(error = %e, "could not create data directory");
            problems.push(e);
        }

        let archive_path = self.archive_path();
        let mut active = self.read_records(&self.furniture_path(), &mut problems);
        let archived = self.read_records(&archive_path, &mut problems);

        let mut archive = Archive::new();
        let mut moved = 0;
        for record in archived {
            if let Err(record) = archive.try_push(record) {
                active.push(record);
                moved += 1;
            }
        }
        if moved > 0 {
            tracing::warn!(
                path = %archive_path.display(),
                moved,
                capacity = archive.capacity(),
                "archive file over capacity; extra records returned to active list"
            );
            problems.push(StoreError::ArchiveOverflow {
                path: archive_path,
                moved,
            });
        }

        tracing::info!(
            active = active.len(),
            archived = archive.len(),
            problems = problems.len(),
            "inventory loaded"
        );

        LoadOutcome {
            inventory: Inventory::from_parts(active, archive),
            problems,
        }
    }

    /// Save both collections; one file failing does not stop the other
    pub fn save(&self, inventory: &Inventory) -> SaveOutcome {
        if let Err(e) = self.ensure_dir() {
            tracing::warn!(error = %e, "could not create data directory");
        }

        let outcome = SaveOutcome {
            active: self.write_records(&self.furniture_path(), inventory.active()),
            archive: self.write_records(&self.archive_path(), inventory.archived()),
        };

        for error in outcome.errors() {
            tracing::error!(error = %error, "save failed");
        }
        if outcome.is_ok() {
            tracing::info!(
                active = inventory.active().len(),
                archived = inventory.archived().len(),
                "inventory saved"
            );
        }

        outcome
    }

    fn read_records(&mut self, path: &Path, problems: &mut Vec<StoreError>) -> Vec<Furniture> {
        match fs::read(path) {
            Ok(bytes) => decode_records(path, &bytes, problems),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no data file yet");
                Vec::new()
            }
            Err(e) => {
                let error = StoreError::io(path, e);
                tracing::warn!(
                    error = %error,
                    "could not read data file; it will not be overwritten"
                );
                problems.push(error);
                self.unreadable.push(path.to_path_buf());
                Vec::new()
            }
        }
    }

    fn write_records(&self, path: &Path, records: &[Furniture]) -> Result<usize, StoreError> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(StoreError::Unreadable {
                path: path.to_path_buf(),
            });
        }

        let mut file =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        write_lines(&mut file, records).map_err(|e| StoreError::io(path, e))?;

        file.persist(path)
            .map_err(|e| StoreError::io(path, e.error))?;

        tracing::debug!(path = %path.display(), records = records.len(), "file written");
        Ok(records.len())
    }
}

fn write_lines<W: Write>(out: W, records: &[Furniture]) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    for record in records {
        writeln!(writer, "{}", record.encode())?;
    }
    writer.flush()
}

fn decode_records(path: &Path, bytes: &[u8], problems: &mut Vec<StoreError>) -> Vec<Furniture> {
    let mut records = Vec::new();
    for (number, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if let Cow::Owned(_) = line {
            let error = StoreError::InvalidUtf8 {
                path: path.to_path_buf(),
                line: number + 1,
            };
            tracing::warn!(error = %error, "replacing invalid bytes");
            problems.push(error);
        }

        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Furniture>() {
            Ok(record) => records.push(record),
            Err(source) => {
                let error = StoreError::MalformedLine {
                    path: path.to_path_buf(),
                    line: number + 1,
                    source,
                };
                tracing::warn!(error = %error, "skipping line");
                problems.push(error);
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomfit_domain::Measurement;
    use tempfile::TempDir;

    fn record(name: &str) -> Furniture {
        Furniture::new(
            name,
            Measurement::new(2, 0),
            Measurement::new(1, 6),
            Measurement::new(3, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_paths() {
        let store = FileStore::new("data");
        assert_eq!(store.furniture_path(), Path::new("data").join("furniture.txt"));
        assert_eq!(
            store.archive_path(),
            Path::new("data").join("archived_furniture.txt")
        );
    }

    #[test]
    fn test_write_lines_format() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &[record("Chair"), record("Lamp")]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Chair|2,0|1,6|3,0\nLamp|2,0|1,6|3,0\n"
        );
    }

    #[test]
    fn test_read_records_skips_blank_and_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FURNITURE_FILE);
        fs::write(&path, "Chair|2,0|1,6|3,0\n\n   \nbroken line\nLamp|1,0|1,0|5,0\n").unwrap();

        let mut problems = Vec::new();
        let records = FileStore::new(dir.path()).read_records(&path, &mut problems);

        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Chair", "Lamp"]);
        assert_eq!(problems.len(), 1);
        assert!(matches!(problems[0], StoreError::MalformedLine { line: 4, .. }));
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        let mut problems = Vec::new();
        let records = store.read_records(&dir.path().join("absent.txt"), &mut problems);
        assert!(records.is_empty());
        assert!(problems.is_empty());
        assert!(store.unreadable.is_empty());
    }

    #[test]
    fn test_decode_replaces_invalid_bytes_and_keeps_line() {
        let path = Path::new(FURNITURE_FILE);
        let mut problems = Vec::new();
        let bytes = b"Caf\xE9|2,0|2,0|3,0\r\nDesk|4,0|2,0|2,6\r\n";
        let records = decode_records(path, bytes, &mut problems);

        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Caf\u{FFFD}", "Desk"]);
        assert!(matches!(
            &problems[..],
            [StoreError::InvalidUtf8 { line: 1, .. }]
        ));
    }
}
