//! User collection access, plus the remembered-email slot.

use unlock_style_core::Email;
use unlock_style_storage::{StorageError, Store, keys};

use crate::models::User;

/// Repository for the `salonUsers` collection.
pub struct UserRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load all accounts; absent or unreadable means empty.
    #[must_use]
    pub fn load(&self) -> Vec<User> {
        unlock_style_storage::read(self.store, keys::USERS)
    }

    /// Find an account by exact email match.
    ///
    /// The match is case-sensitive: `A@b.com` and `a@b.com` are two
    /// different accounts, because that is how the data has always been
    /// keyed and a looser match would orphan existing records.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<User> {
        self.load().into_iter().find(|u| u.email == *email)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn save(&self, users: &[User]) -> Result<(), StorageError> {
        unlock_style_storage::write(self.store, keys::USERS, users)
    }

    // =========================================================================
    // Remembered email
    // =========================================================================

    /// Persist the email for "remember me". Only the email is stored,
    /// never a session or credential.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn remember(&self, email: &Email) -> Result<(), StorageError> {
        self.store.set(keys::REMEMBERED_USER, email.as_str())
    }

    /// The remembered email, if one was stored and still parses.
    #[must_use]
    pub fn remembered(&self) -> Option<Email> {
        let raw = self.store.get(keys::REMEMBERED_USER)?;
        Email::parse(&raw).ok()
    }

    /// Drop the remembered email.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal fails.
    pub fn forget(&self) -> Result<(), StorageError> {
        self.store.remove(keys::REMEMBERED_USER)
    }
}
