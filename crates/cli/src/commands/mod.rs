//! CLI subcommand implementations.

pub mod bookings;
pub mod export;
pub mod seed;
pub mod stats;
