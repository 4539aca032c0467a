//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unlock_style_core::{ContactId, ContactSubject, Email, Phone};

/// A message left through the contact page.
///
/// `read` starts false and is only ever flipped by someone on the admin
/// side; submissions themselves never mark anything read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactId,
    pub name: String,
    pub phone: Phone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub subject: ContactSubject,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}
