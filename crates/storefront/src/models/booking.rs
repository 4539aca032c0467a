//! Booking records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use unlock_style_core::{BookingId, BookingStatus, BookingView, Email, PaymentMethod, Phone};

/// A service captured on a booking.
///
/// Lines are deep-copied from the cart at creation time, so later catalog
/// price changes never rewrite what the customer agreed to pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub name: String,
    pub price: Decimal,
}

/// A confirmed (or cancelled) salon visit.
///
/// Only `Confirmed` and `Cancelled` are ever persisted in `status`;
/// "completed" is a property of the clock, computed on read via [`view`].
///
/// [`view`]: Booking::view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub phone: Phone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub payment: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub services: Vec<ServiceLine>,
    pub subtotal: Decimal,
    /// Subtotal plus 18% GST, rounded to two decimal places.
    pub total: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// The appointment slot as a wall-clock datetime.
    #[must_use]
    pub fn slot(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Project the persisted status onto what the customer sees right now.
    ///
    /// Cancelled wins unconditionally. Otherwise a booking is upcoming
    /// exactly while its slot is still in the future, and completed the
    /// moment it passes; nothing is ever written back for that transition.
    #[must_use]
    pub fn view(&self, now: DateTime<Utc>) -> BookingView {
        match self.status {
            BookingStatus::Cancelled => BookingView::Cancelled,
            BookingStatus::Confirmed => {
                if self.slot() > now.naive_utc() {
                    BookingView::Upcoming
                } else {
                    BookingView::Completed
                }
            }
        }
    }
}
