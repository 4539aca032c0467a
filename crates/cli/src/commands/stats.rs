//! Show the dashboard counters.

use chrono::Utc;
use tracing::info;

use unlock_style_admin::stats::dashboard_stats;
use unlock_style_storage::Store;

/// Print the counters the admin dashboard shows.
pub fn run(store: &dyn Store) {
    let stats = dashboard_stats(store, Utc::now());

    info!("Dashboard");
    info!("  Services:  {}", stats.services);
    info!("  Customers: {}", stats.customers);
    info!("  Staff:     {}", stats.staff);
    info!("  Bookings:  {} ({} upcoming)", stats.bookings, stats.upcoming);
    info!("  Revenue:   ₹{}", stats.revenue);
}
