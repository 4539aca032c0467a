//! Contact message collection access.

use unlock_style_storage::{StorageError, Store, keys};

use crate::models::ContactMessage;

/// Repository for the `salonContacts` collection.
pub struct ContactRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all messages; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<ContactMessage> {
        unlock_style_storage::read(self.store, keys::CONTACTS)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, messages: &[ContactMessage]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::CONTACTS, messages)
    }
}
