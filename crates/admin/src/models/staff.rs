//! Staff directory records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use unlock_style_core::{AccountStatus, Email, Phone, StaffId};

/// A member of the salon team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub phone: Phone,
    pub email: Email,
    /// What they are booked for, e.g. "Haircuts & Styling".
    pub specialty: String,
    /// Lifetime bookings handled.
    pub bookings: u32,
    /// Average customer rating out of 5.
    pub rating: Decimal,
    pub status: AccountStatus,
}
