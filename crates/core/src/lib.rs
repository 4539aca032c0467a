//! Unlock Style Core - Shared types library.
//!
//! This crate provides common types used across all Unlock Style components:
//! - `storefront` - Customer-facing managers (cart, bookings, auth, contact)
//! - `admin` - Salon administration managers (staff, customers, broadcasts)
//! - `cli` - Command-line tools for seeding and data export
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! access to the persistent store. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated wrappers for IDs, emails, phone numbers, money,
//!   and the status enums shared by the managers
//! - [`catalog`] - The default service catalog offered by the salon

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
