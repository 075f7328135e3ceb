//! Add command implementation.

use crate::error::Result;
use crate::output::Formatter;
use roomfit_domain::{Furniture, Measurement};
use roomfit_store::Inventory;

/// Execute the add command.
pub fn execute_add(
    inventory: &mut Inventory,
    name: &str,
    length: Measurement,
    width: Measurement,
    height: Measurement,
    formatter: &Formatter,
) -> Result<()> {
    let record = Furniture::new(name.trim(), length, width, height)?;
    tracing::debug!(name = record.name(), "adding furniture");
    inventory.add(record);

    println!("{}", formatter.success("Furniture added successfully!"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;

    #[test]
    fn test_add_trims_name() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut inventory = Inventory::new();
        let m = Measurement::new(1, 0);

        execute_add(&mut inventory, "  Lamp ", m, m, m, &formatter).unwrap();
        assert_eq!(inventory.active()[0].name(), "Lamp");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut inventory = Inventory::new();
        let m = Measurement::new(1, 0);

        let result = execute_add(&mut inventory, "   ", m, m, m, &formatter);
        assert!(matches!(result, Err(CliError::Furniture(_))));
        assert!(inventory.active().is_empty());
    }
}
