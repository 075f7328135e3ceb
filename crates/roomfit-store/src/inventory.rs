//! Active inventory and the capacity-bounded archive.

use roomfit_domain::Furniture;
use thiserror::Error;

/// Maximum number of archived records.
pub const ARCHIVE_CAPACITY: usize = 100;

/// Errors from inventory mutations. Both leave the inventory unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Index does not refer to an active record
    #[error("index {index} out of range (valid: 0..{len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Active list length at the time of the request
        len: usize,
    },

    /// Archive already holds its maximum number of records
    #[error("archive is full ({capacity} items)")]
    ArchiveFull {
        /// Archive capacity
        capacity: usize,
    },
}

/// Ordered collection with a fixed maximum length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    items: Vec<Furniture>,
    capacity: usize,
}

impl Archive {
    /// Empty archive with the standard capacity
    pub fn new() -> Self {
        Self::with_capacity(ARCHIVE_CAPACITY)
    }

    /// Empty archive with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Append a record, handing it back if the archive is full
    pub fn try_push(&mut self, record: Furniture) -> Result<&Furniture, Furniture> {
        if self.is_full() {
            return Err(record);
        }
        let index = self.items.len();
        self.items.push(record);
        Ok(&self.items[index])
    }

    /// Records in archive order
    pub fn items(&self) -> &[Furniture] {
        &self.items
    }

    /// Number of archived records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been archived
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when no further records can be archived
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::new()
    }
}

/// The active furniture list plus its archive
///
/// Every record is owned by exactly one of the two collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    active: Vec<Furniture>,
    archive: Archive,
}

impl Inventory {
    /// Empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-loaded collections
    pub fn from_parts(active: Vec<Furniture>, archive: Archive) -> Self {
        Self { active, archive }
    }

    /// Append a record to the active list
    pub fn add(&mut self, record: Furniture) {
        self.active.push(record);
    }

    /// Remove and return the active record at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Furniture, InventoryError> {
        self.check_index(index)?;
        Ok(self.active.remove(index))
    }

    /// Move the active record at `index` into the archive
    ///
    /// On a full archive the record is put back at `index` and
    /// [`InventoryError::ArchiveFull`] is returned. Returns a reference to the
    /// archived record on success.
    pub fn archive(&mut self, index: usize) -> Result<&Furniture, InventoryError> {
        let record = self.remove_at(index)?;

        let capacity = self.archive.capacity();
        match self.archive.try_push(record) {
            Ok(archived) => Ok(archived),
            Err(record) => {
                self.active.insert(index, record);
                Err(InventoryError::ArchiveFull { capacity })
            }
        }
    }

    /// Active records in insertion order
    pub fn active(&self) -> &[Furniture] {
        &self.active
    }

    /// Archived records in archive order
    pub fn archived(&self) -> &[Furniture] {
        self.archive.items()
    }

    fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        if index >= self.active.len() {
            return Err(InventoryError::IndexOutOfRange {
                index,
                len: self.active.len(),
            });
        }
        Ok(())
    }
}
