//! Dashboard counters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use unlock_style_core::BookingView;
use unlock_style_core::catalog::{Service, default_services};
use unlock_style_storage::{Store, keys};
use unlock_style_storefront::db::BookingRepository;

use crate::db::CustomerRepository;
use crate::staff::StaffDirectory;

/// The numbers on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub services: usize,
    pub customers: usize,
    pub staff: usize,
    pub bookings: usize,
    /// Confirmed bookings whose slot is still ahead of `now`.
    pub upcoming: usize,
    /// Sum of totals over all non-cancelled bookings.
    pub revenue: Decimal,
}

/// Compute the dashboard counters as of `now`.
#[must_use]
pub fn dashboard_stats(store: &dyn Store, now: DateTime<Utc>) -> DashboardStats {
    let services: Vec<Service> = unlock_style_storage::read(store, keys::SERVICES);
    let service_count = if services.is_empty() {
        default_services().len()
    } else {
        services.len()
    };

    let bookings = BookingRepository::new(store).load();
    let upcoming = bookings
        .iter()
        .filter(|b| b.view(now) == BookingView::Upcoming)
        .count();
    let revenue = bookings
        .iter()
        .filter(|b| b.view(now) != BookingView::Cancelled)
        .map(|b| b.total)
        .sum();

    DashboardStats {
        services: service_count,
        customers: CustomerRepository::new(store).load().len(),
        staff: StaffDirectory::new(store).list().len(),
        bookings: bookings.len(),
        upcoming,
        revenue,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use unlock_style_core::PaymentMethod;
    use unlock_style_storage::MemoryStore;
    use unlock_style_storefront::bookings::{BookingForm, BookingManager};
    use unlock_style_storefront::cart::CartManager;

    #[test]
    fn test_empty_store_counts_defaults() {
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let stats = dashboard_stats(&store, now);

        assert_eq!(stats.services, 8);
        assert_eq!(stats.staff, 3);
        assert_eq!(stats.customers, 0);
        assert_eq!(stats.bookings, 0);
        assert_eq!(stats.revenue, Decimal::ZERO);
    }

    #[test]
    fn test_revenue_excludes_cancelled() {
        let store = MemoryStore::new();
        let manager = BookingManager::new(&store);
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

        let mut cart = CartManager::open(&store);
        cart.add_item("Classic Haircut", Decimal::from(199), created)
            .unwrap();
        let form = BookingForm {
            name: "Asha".to_owned(),
            phone: "9876543210".to_owned(),
            email: None,
            date: Some("2025-06-15".parse().unwrap()),
            time: Some("14:00:00".parse().unwrap()),
            payment: PaymentMethod::Upi,
            instructions: None,
        };
        let booking = manager.create(&form, &mut cart, created).unwrap();

        let now = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let stats = dashboard_stats(&store, now);
        assert_eq!(stats.bookings, 1);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.revenue, Decimal::new(23482, 2));

        manager.cancel(&booking.id, now).unwrap();
        let stats = dashboard_stats(&store, now);
        assert_eq!(stats.bookings, 1);
        assert_eq!(stats.upcoming, 0);
        assert_eq!(stats.revenue, Decimal::ZERO);
    }
}
