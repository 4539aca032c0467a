//! The contact form.

use chrono::{DateTime, Utc};
use thiserror::Error;

use unlock_style_core::{ContactId, ContactSubject, Email, EmailError, Phone, PhoneError};
use unlock_style_storage::{StorageError, Store};

use crate::db::ContactRepository;
use crate::models::ContactMessage;

/// Minimum message length.
const MIN_MESSAGE_LENGTH: usize = 10;

/// Minimum name length.
const MIN_NAME_LENGTH: usize = 2;

/// Errors that can occur when submitting the contact form.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },

    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("a subject must be chosen")]
    SubjectMissing,

    #[error("message must be at least {min} characters")]
    MessageTooShort { min: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What the contact page collects.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

/// The contact form handler.
pub struct ContactDesk<'a> {
    repo: ContactRepository<'a>,
}

impl<'a> ContactDesk<'a> {
    /// Create a contact desk over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            repo: ContactRepository::new(store),
        }
    }

    /// Validate and persist a submission. New messages start unread.
    ///
    /// # Errors
    ///
    /// Returns the first field error found, or a storage error from the
    /// write.
    pub fn submit(
        &self,
        form: &ContactForm,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, ContactError> {
        let name = form.name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(ContactError::NameTooShort {
                min: MIN_NAME_LENGTH,
            });
        }
        let phone = Phone::parse(&form.phone)?;
        let email = form.email.as_deref().map(Email::parse).transpose()?;
        let subject = form.subject.ok_or(ContactError::SubjectMissing)?;
        let message = form.message.trim();
        if message.chars().count() < MIN_MESSAGE_LENGTH {
            return Err(ContactError::MessageTooShort {
                min: MIN_MESSAGE_LENGTH,
            });
        }

        let record = ContactMessage {
            id: ContactId::generate(now),
            name: name.to_owned(),
            phone,
            email,
            subject,
            message: message.to_owned(),
            timestamp: now,
            read: false,
        };

        let mut messages = self.repo.load();
        messages.push(record.clone());
        self.repo.save(&messages)?;

        tracing::info!(id = %record.id, "contact message received");
        Ok(record)
    }

    /// All messages in submission order.
    #[must_use]
    pub fn messages(&self) -> Vec<ContactMessage> {
        self.repo.load()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use unlock_style_storage::MemoryStore;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Asha".to_owned(),
            phone: "9876543210".to_owned(),
            email: None,
            subject: Some(ContactSubject::Feedback),
            message: "Loved the haircut, will come again.".to_owned(),
        }
    }

    #[test]
    fn test_submit_persists_unread() {
        let store = MemoryStore::new();
        let desk = ContactDesk::new(&store);

        let record = desk.submit(&form(), now()).unwrap();
        assert!(record.id.as_str().starts_with("CT"));
        assert!(!record.read);
        assert_eq!(desk.messages().len(), 1);
    }

    #[test]
    fn test_subject_required() {
        let store = MemoryStore::new();
        let desk = ContactDesk::new(&store);

        let mut bad = form();
        bad.subject = None;
        assert!(matches!(
            desk.submit(&bad, now()),
            Err(ContactError::SubjectMissing)
        ));
    }

    #[test]
    fn test_short_message_rejected() {
        let store = MemoryStore::new();
        let desk = ContactDesk::new(&store);

        let mut bad = form();
        bad.message = "Too short".to_owned();
        assert!(matches!(
            desk.submit(&bad, now()),
            Err(ContactError::MessageTooShort { min: 10 })
        ));
    }

    #[test]
    fn test_bad_phone_rejected() {
        let store = MemoryStore::new();
        let desk = ContactDesk::new(&store);

        let mut bad = form();
        bad.phone = "1234".to_owned();
        assert!(matches!(
            desk.submit(&bad, now()),
            Err(ContactError::InvalidPhone(_))
        ));
    }
}
