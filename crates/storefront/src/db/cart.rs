//! Cart collection access.

use unlock_style_storage::{StorageError, Store, keys};

use crate::models::CartItem;

/// Repository for the `salonCart` collection.
pub struct CartRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all cart lines; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<CartItem> {
        unlock_style_storage::read(self.store, keys::CART)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::CART, items)
    }
}
