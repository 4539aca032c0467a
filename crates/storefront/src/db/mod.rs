//! Typed repositories over the shared store.
//!
//! Each repository binds one collection key to its record type. Managers
//! take a repository (or the store to build one) explicitly; nothing in
//! this crate reaches for a global.

pub mod bookings;
pub mod cart;
pub mod contacts;
pub mod users;

pub use bookings::BookingRepository;
pub use cart::CartRepository;
pub use contacts::ContactRepository;
pub use users::UserRepository;
