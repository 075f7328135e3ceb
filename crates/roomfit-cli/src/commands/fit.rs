//! Room fit command implementation.

use crate::error::Result;
use crate::output::Formatter;
use roomfit_domain::Room;
use roomfit_store::Inventory;

/// Evaluate every active record against `room` and print the report.
pub fn execute_fit(inventory: &Inventory, room: &Room, formatter: &Formatter) -> Result<()> {
    let report = room.evaluate(inventory.active());
    tracing::debug!(
        area = report.floor_area_sq_ft,
        fitting = report.fitting_count(),
        total = report.results.len(),
        "room evaluated"
    );

    println!("{}", formatter.format_fit_report(room, &report)?);
    Ok(())
}
