//! Persisted record types for the admin collections.

pub mod customer;
pub mod notification;
pub mod staff;

pub use customer::Customer;
pub use notification::Notification;
pub use staff::StaffMember;
