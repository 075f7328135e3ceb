//! List commands for the active list and the archive.

use crate::error::Result;
use crate::output::Formatter;
use roomfit_store::Inventory;

/// Print the active furniture list.
pub fn execute_list(inventory: &Inventory, formatter: &Formatter) -> Result<()> {
    let output = formatter.format_furniture(
        "Current Furniture:",
        inventory.active(),
        "No furniture in current list.",
    )?;
    println!("{}", output);
    Ok(())
}

/// Print the archived furniture list.
pub fn execute_list_archived(inventory: &Inventory, formatter: &Formatter) -> Result<()> {
    let output = formatter.format_furniture(
        "Archived Furniture:",
        inventory.archived(),
        "No archived furniture.",
    )?;
    println!("{}", output);
    Ok(())
}
