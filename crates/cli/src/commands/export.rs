//! Export a collection as CSV.

use std::path::Path;

use tracing::info;

use unlock_style_admin::customers::CustomerDirectory;
use unlock_style_admin::export::to_csv;
use unlock_style_admin::staff::StaffDirectory;
use unlock_style_storage::Store;
use unlock_style_storefront::bookings::BookingManager;

use crate::ExportTarget;

/// Write the chosen collection to `out` as CSV.
///
/// # Errors
///
/// Returns an error if the collection is empty or the file cannot be
/// written.
pub fn run(
    store: &dyn Store,
    target: ExportTarget,
    out: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let csv = match target {
        ExportTarget::Customers => to_csv(&CustomerDirectory::new(store).list())?,
        ExportTarget::Staff => to_csv(&StaffDirectory::new(store).list())?,
        ExportTarget::Bookings => to_csv(&BookingManager::new(store).list())?,
    };

    std::fs::write(out, &csv)?;
    info!(path = %out.display(), rows = csv.lines().count() - 1, "exported");

    Ok(())
}
