//! Staff collection access.

use unlock_style_storage::{StorageError, Store, keys};

use crate::models::StaffMember;

/// Repository for the `salonStaff` collection.
pub struct StaffRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> StaffRepository<'a> {
    /// Create a new staff repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all staff records; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<StaffMember> {
        unlock_style_storage::read(self.store, keys::STAFF)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, staff: &[StaffMember]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::STAFF, staff)
    }
}
