//! Booking collection access.

use unlock_style_core::BookingId;
use unlock_style_storage::{StorageError, Store, keys};

use crate::models::Booking;

/// Repository for the `salonBookings` collection.
///
/// Bookings are kept in insertion order and are never removed, only
/// marked cancelled.
pub struct BookingRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> BookingRepository<'a> {
    /// Create a new booking repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all bookings; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<Booking> {
        unlock_style_storage::read(self.store, keys::BOOKINGS)
    }

    /// Find one booking by id.
    #[must_use]
    pub fn find(&self, id: &BookingId) -> Option<Booking> {
        self.load().into_iter().find(|b| &b.id == id)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::BOOKINGS, bookings)
    }
}
