//! Unlock Style Storefront - the customer-facing side of the salon.
//!
//! Everything a visitor can do on the site lives here:
//!
//! - [`cart`] - the service cart with write-through persistence
//! - [`bookings`] - creating, filtering, cancelling, and rebooking visits
//! - [`services::auth`] - registration, login, sessions, and profile edits
//! - [`contact`] - the contact form
//!
//! Managers own no storage themselves. Each wraps a typed repository over a
//! [`unlock_style_storage::Store`], so the same logic runs against the file
//! store in production and the memory store in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bookings;
pub mod cart;
pub mod contact;
pub mod db;
pub mod models;
pub mod services;
