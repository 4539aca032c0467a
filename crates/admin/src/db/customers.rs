//! Customer collection access.

use unlock_style_storage::{StorageError, Store, keys};

use crate::models::Customer;

/// Repository for the `salonCustomers` collection.
pub struct CustomerRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all customer records; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<Customer> {
        unlock_style_storage::read(self.store, keys::CUSTOMERS)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, customers: &[Customer]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::CUSTOMERS, customers)
    }
}
