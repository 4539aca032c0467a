//! Broadcast notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unlock_style_core::{Audience, NotificationId, NotificationKind};

/// One broadcast, persisted before delivery is attempted.
///
/// `sent` is flipped to true only after the delivery channel reports
/// success; a failed broadcast stays in the history with `sent` false as
/// its own audit trail. Nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub audience: Audience,
    pub timestamp: DateTime<Utc>,
    pub sent: bool,
}
