//! Validated domain primitives.
//!
//! Every record the managers persist is built from these types, so invalid
//! emails, phone numbers, and statuses are rejected at the edges rather
//! than discovered inside a collection.

mod email;
mod id;
mod money;
mod password;
mod phone;
mod status;

pub use email::{Email, EmailError};
pub use id::{BookingId, ContactId, CustomerId, ItemId, NotificationId, StaffId, UserId};
pub use money::{GST_RATE, gst, round_money, with_gst};
pub use password::{PasswordStrength, StrengthLabel};
pub use phone::{Phone, PhoneError};
pub use status::{
    AccountStatus, Audience, BookingStatus, BookingView, ContactSubject, NotificationKind,
    PaymentMethod,
};
