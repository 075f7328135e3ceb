//! Saving the inventory back to the data files.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use roomfit_store::{FileStore, Inventory};

/// Save both files, printing each failure. Returns the number of failed files.
pub fn execute_save(store: &FileStore, inventory: &Inventory, formatter: &Formatter) -> usize {
    let outcome = store.save(inventory);
    let mut failures = 0;
    for error in outcome.errors() {
        eprintln!("{}", formatter.error(&error.to_string()));
        failures += 1;
    }
    failures
}

/// Save both files and turn any failure into [`CliError::SaveFailed`].
pub fn save_or_fail(
    store: &FileStore,
    inventory: &Inventory,
    formatter: &Formatter,
) -> Result<()> {
    match execute_save(store, inventory, formatter) {
        0 => Ok(()),
        failures => Err(CliError::SaveFailed(failures)),
    }
}

/// Closing line of an interactive session.
pub fn goodbye_message(failures: usize) -> &'static str {
    if failures == 0 {
        "Goodbye! Data saved."
    } else {
        "Goodbye!"
    }
}
