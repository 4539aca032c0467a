//! Unlock Style Storage - the persistent key-value store.
//!
//! Every collection in the system (cart, bookings, users, staff, customers,
//! notifications, contacts) lives as a JSON document under a fixed key.
//! This crate provides:
//!
//! - [`Store`] - the `get`/`set`/`remove` string contract
//! - [`read`]/[`write`] - typed helpers with default-on-missing semantics
//! - [`JsonFileStore`] - one file per key under a data directory
//! - [`MemoryStore`] - in-memory store for tests
//! - [`keys`] - the fixed key constants shared by every page
//!
//! # Consistency
//!
//! The store is shared mutable state across independently running
//! processes. Writes are whole-value and last-writer-wins; there are no
//! transactions. A multi-step update (e.g. persist booking, then clear
//! cart) is two separate writes and can be observed half-done.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod json_file;
pub mod keys;
mod memory;
mod store;

pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{Store, read, write};
