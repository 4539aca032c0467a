//! CLI configuration from the environment.

use std::path::PathBuf;

/// Environment variable naming the data directory.
const DATA_DIR_VAR: &str = "SALON_DATA_DIR";

/// Where the store lives when the variable is unset.
const DEFAULT_DATA_DIR: &str = "./salon-data";

/// Resolve the data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_VAR).map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}
