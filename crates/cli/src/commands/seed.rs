//! Seed the store with catalog, staff, and sample customers.

use chrono::Utc;
use tracing::info;

use unlock_style_admin::customers::CustomerDirectory;
use unlock_style_admin::staff::StaffDirectory;
use unlock_style_core::catalog::{Service, default_services};
use unlock_style_storage::{Store, keys};

/// Seed everything that is still empty. Existing data is never replaced,
/// so re-running after edits is safe.
///
/// # Errors
///
/// Returns an error if any of the writes fail.
pub fn run(store: &dyn Store, customers: usize) -> Result<(), Box<dyn std::error::Error>> {
    let services: Vec<Service> = unlock_style_storage::read(store, keys::SERVICES);
    if services.is_empty() {
        let catalog = default_services();
        unlock_style_storage::write(store, keys::SERVICES, &catalog)?;
        info!(services = catalog.len(), "seeded service catalog");
    }

    let roster = StaffDirectory::new(store).seed()?;
    info!(staff = roster.len(), "staff roster ready");

    let seeded = CustomerDirectory::new(store).seed_samples(
        customers,
        &mut rand::rng(),
        Utc::now().date_naive(),
    )?;
    info!(customers = seeded.len(), "customer directory ready");

    Ok(())
}
