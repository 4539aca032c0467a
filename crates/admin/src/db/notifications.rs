//! Notification history access.

use unlock_style_storage::{StorageError, Store, keys};

use crate::models::Notification;

/// Repository for the `salonNotifications` collection, kept newest first.
pub struct NotificationRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> NotificationRepository<'a> {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load the history; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<Notification> {
        unlock_style_storage::read(self.store, keys::NOTIFICATIONS)
    }

    /// Replace the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, notifications: &[Notification]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::NOTIFICATIONS, notifications)
    }
}
