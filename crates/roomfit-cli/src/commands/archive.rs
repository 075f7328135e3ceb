//! Archive command implementation.

use crate::error::Result;
use crate::output::Formatter;
use roomfit_store::Inventory;

/// Move the active record at `index` into the archive.
pub fn execute_archive(inventory: &mut Inventory, index: usize, formatter: &Formatter) -> Result<()> {
    let archived = inventory.archive(index)?;
    tracing::info!(index, name = archived.name(), "furniture archived");

    println!(
        "{}",
        formatter.success(&format!("{} archived successfully.", archived.name()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use roomfit_domain::{Furniture, Measurement};
    use roomfit_store::{InventoryError, ARCHIVE_CAPACITY};

    fn record(name: &str) -> Furniture {
        let m = Measurement::new(2, 0);
        Furniture::new(name, m, m, m).unwrap()
    }

    #[test]
    fn test_archive_out_of_range() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut inventory = Inventory::new();
        inventory.add(record("Chair"));

        let result = execute_archive(&mut inventory, 5, &formatter);
        assert!(matches!(
            result,
            Err(CliError::Inventory(InventoryError::IndexOutOfRange { index: 5, len: 1 }))
        ));
        assert_eq!(inventory.active().len(), 1);
    }

    #[test]
    fn test_archive_full_reports_capacity() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut inventory = Inventory::new();
        for i in 0..=ARCHIVE_CAPACITY {
            inventory.add(record(&format!("item-{i}")));
        }
        for _ in 0..ARCHIVE_CAPACITY {
            execute_archive(&mut inventory, 0, &formatter).unwrap();
        }

        let result = execute_archive(&mut inventory, 0, &formatter);
        assert!(matches!(
            result,
            Err(CliError::Inventory(InventoryError::ArchiveFull { .. }))
        ));
        assert_eq!(inventory.active()[0].name(), "item-100");
        assert_eq!(inventory.archived().len(), ARCHIVE_CAPACITY);
    }
}
