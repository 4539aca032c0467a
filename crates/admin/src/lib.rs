//! Unlock Style Admin - back-office data managers.
//!
//! These managers work over the same store the storefront writes, so the
//! admin side always sees live data:
//!
//! - [`staff`] - the staff directory with its built-in default roster
//! - [`customers`] - the customer directory (search, filters, paging)
//! - [`notifications`] - broadcast records with pluggable delivery
//! - [`export`] - CSV export for any serializable collection
//! - [`stats`] - the dashboard counters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod customers;
pub mod db;
pub mod export;
pub mod models;
pub mod notifications;
pub mod staff;
pub mod stats;
