//! Persisted record types for the storefront collections.

pub mod booking;
pub mod cart;
pub mod contact;
pub mod user;

pub use booking::{Booking, ServiceLine};
pub use cart::CartItem;
pub use contact::ContactMessage;
pub use user::User;
