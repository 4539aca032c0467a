//! Status enums for the salon's entities.
//!
//! [`BookingStatus`] is the *persisted* booking state machine and has only
//! two states. "Completed" is never written: it is the read-time projection
//! [`BookingView`] computed by comparing the slot to the current time.

use serde::{Deserialize, Serialize};

/// Persisted booking status.
///
/// `Confirmed` is the state every booking is created in; `Cancelled` is the
/// only transition ever written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

/// How a booking presents at a given instant.
///
/// Derived on every read; never stored. A `Confirmed` booking whose slot
/// has passed projects to `Completed` without any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingView {
    Upcoming,
    Completed,
    Cancelled,
}

impl std::fmt::Display for BookingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// How the customer pays for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid online at checkout.
    Upi,
    /// Pay at the salon.
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upi => write!(f, "UPI Payment"),
            Self::Cash => write!(f, "Pay at Salon"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(Self::Upi),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Staff member / customer account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Category of an admin broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Promotion,
    Reminder,
    Alert,
}

/// Who an admin broadcast targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    All,
    Customers,
    Staff,
}

/// Subject line options on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    General,
    Booking,
    Feedback,
    Complaint,
}
