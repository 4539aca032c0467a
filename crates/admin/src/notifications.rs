//! Notification broadcasts.
//!
//! A broadcast is persisted before any delivery is attempted, so the
//! history is the source of truth even when the channel is down. `sent`
//! records the one delivery attempt's outcome; there is no retry queue.

use chrono::{DateTime, Utc};
use thiserror::Error;

use unlock_style_core::{Audience, NotificationId, NotificationKind};
use unlock_style_storage::{StorageError, Store};

use crate::db::NotificationRepository;

pub use crate::models::Notification;

/// Errors that can occur while broadcasting.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("title is required")]
    TitleMissing,

    #[error("message is required")]
    MessageMissing,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A delivery channel failure, reported by the channel itself.
#[derive(Debug, Error)]
#[error("delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// A way of getting a broadcast in front of its audience.
///
/// Implementations decide what delivery means (push, email, a toast in a
/// demo). Failure leaves the persisted record with `sent` false.
pub trait NotificationDelivery {
    /// Attempt to deliver the broadcast once.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the channel could not deliver.
    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// What the broadcast form collects.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub audience: Audience,
}

/// The notification manager.
pub struct NotificationCenter<'a> {
    repo: NotificationRepository<'a>,
}

impl<'a> NotificationCenter<'a> {
    /// Create a notification center over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            repo: NotificationRepository::new(store),
        }
    }

    /// Persist a broadcast and attempt delivery once.
    ///
    /// The record is prepended to the history with `sent` false, the
    /// channel is tried, and only on success is `sent` flipped true and
    /// re-persisted. A failed delivery is logged and the record kept
    /// as-is for audit.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty title or message, or a
    /// storage error from either persist. Delivery failure is not an
    /// error from this method.
    pub fn broadcast(
        &self,
        draft: &NotificationDraft,
        delivery: &dyn NotificationDelivery,
        now: DateTime<Utc>,
    ) -> Result<Notification, NotificationError> {
        if draft.title.trim().is_empty() {
            return Err(NotificationError::TitleMissing);
        }
        if draft.message.trim().is_empty() {
            return Err(NotificationError::MessageMissing);
        }

        let mut history = self.repo.load();
        let mut id = NotificationId::from_timestamp(now);
        if let Some(max) = history.iter().map(|n| n.id).max()
            && id <= max
        {
            id = NotificationId::new(max.as_i64() + 1);
        }

        let mut notification = Notification {
            id,
            title: draft.title.trim().to_owned(),
            message: draft.message.trim().to_owned(),
            kind: draft.kind,
            audience: draft.audience,
            timestamp: now,
            sent: false,
        };
        history.insert(0, notification.clone());
        self.repo.save(&history)?;

        match delivery.deliver(&notification) {
            Ok(()) => {
                notification.sent = true;
                if let Some(stored) = history.first_mut() {
                    stored.sent = true;
                }
                self.repo.save(&history)?;
                tracing::info!(id = %notification.id, "broadcast delivered");
            }
            Err(err) => {
                tracing::warn!(id = %notification.id, error = %err, "broadcast delivery failed");
            }
        }

        Ok(notification)
    }

    /// The broadcast history, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<Notification> {
        self.repo.load()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use unlock_style_storage::MemoryStore;

    struct AlwaysDelivers;

    impl NotificationDelivery for AlwaysDelivers {
        fn deliver(&self, _notification: &Notification) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    struct ChannelDown;

    impl NotificationDelivery for ChannelDown {
        fn deliver(&self, _notification: &Notification) -> Result<(), DeliveryError> {
            Err(DeliveryError("connection refused".to_owned()))
        }
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, secs).unwrap()
    }

    fn draft(title: &str) -> NotificationDraft {
        NotificationDraft {
            title: title.to_owned(),
            message: "Flat 20% off on all spa treatments this weekend.".to_owned(),
            kind: NotificationKind::Promotion,
            audience: Audience::Customers,
        }
    }

    #[test]
    fn test_successful_broadcast_marked_sent() {
        let store = MemoryStore::new();
        let center = NotificationCenter::new(&store);

        let sent = center
            .broadcast(&draft("Weekend offer"), &AlwaysDelivers, at(0))
            .unwrap();
        assert!(sent.sent);

        let history = center.history();
        assert_eq!(history.len(), 1);
        assert!(history[0].sent);
    }

    #[test]
    fn test_failed_delivery_keeps_record_unsent() {
        let store = MemoryStore::new();
        let center = NotificationCenter::new(&store);

        let kept = center
            .broadcast(&draft("Weekend offer"), &ChannelDown, at(0))
            .unwrap();
        assert!(!kept.sent);

        // The record is still in the history as an audit entry.
        let history = center.history();
        assert_eq!(history.len(), 1);
        assert!(!history[0].sent);
    }

    #[test]
    fn test_history_is_newest_first() {
        let store = MemoryStore::new();
        let center = NotificationCenter::new(&store);

        center
            .broadcast(&draft("First"), &AlwaysDelivers, at(0))
            .unwrap();
        center
            .broadcast(&draft("Second"), &AlwaysDelivers, at(1))
            .unwrap();

        let history = center.history();
        assert_eq!(history[0].title, "Second");
        assert_eq!(history[1].title, "First");
    }

    #[test]
    fn test_empty_title_rejected_before_persist() {
        let store = MemoryStore::new();
        let center = NotificationCenter::new(&store);

        let err = center
            .broadcast(&draft("  "), &AlwaysDelivers, at(0))
            .unwrap_err();
        assert!(matches!(err, NotificationError::TitleMissing));
        assert!(center.history().is_empty());
    }
}
