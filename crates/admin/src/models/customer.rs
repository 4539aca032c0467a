//! Customer directory records.
//!
//! These are the admin side's CRM rows. They are deliberately independent
//! of storefront accounts: a customer can exist here from a walk-in or a
//! phone booking without ever registering on the site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use unlock_style_core::{AccountStatus, CustomerId, Email, Phone};

/// A customer as the back office sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    /// Lifetime visit count.
    pub bookings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    pub status: AccountStatus,
}
