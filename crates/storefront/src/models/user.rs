//! User account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unlock_style_core::{Email, Phone, UserId};

/// A registered account.
///
/// The password is stored only as an argon2 hash; there is no way to
/// recover the plaintext from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub password_hash: String,
    pub joined: DateTime<Utc>,
    #[serde(default)]
    pub loyalty_points: u32,
}
