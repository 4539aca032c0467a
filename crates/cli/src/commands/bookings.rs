//! List bookings from the store.

use chrono::Utc;
use tracing::info;

use unlock_style_storage::Store;
use unlock_style_storefront::bookings::{BookingFilter, BookingManager};

/// List bookings matching the filter string.
///
/// # Errors
///
/// Returns an error for an unrecognized filter.
pub fn list(store: &dyn Store, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter: BookingFilter = filter.parse()?;

    let now = Utc::now();
    let manager = BookingManager::new(store);
    let bookings = manager.filter(filter, now);

    if bookings.is_empty() {
        info!("No bookings match");
        return Ok(());
    }

    for booking in &bookings {
        info!(
            "{}  {} {}  {:<10}  {}  ₹{}",
            booking.id,
            booking.date,
            booking.time,
            booking.view(now).to_string(),
            booking.name,
            booking.total,
        );
    }

    let stats = manager.stats(now);
    info!(
        "{} total, {} upcoming, {} completed",
        stats.total, stats.upcoming, stats.completed
    );

    Ok(())
}
