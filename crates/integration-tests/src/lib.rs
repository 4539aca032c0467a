//! Integration tests for Unlock Style.
//!
//! Every scenario runs against a real [`JsonFileStore`] in a temp
//! directory, so the tests exercise the same persistence path the CLI
//! uses, including cross-manager visibility through shared keys.
//!
//! # Running
//!
//! ```bash
//! cargo test -p unlock-style-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use unlock_style_storage::JsonFileStore;

/// A fresh file-backed store that cleans up after itself.
pub struct TestContext {
    // Held for its Drop; deleting it would delete the store's directory.
    _tmp: TempDir,
    pub store: JsonFileStore,
}

impl TestContext {
    /// Create a store in a fresh temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory or store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path().join("data")).unwrap();
        Self { _tmp: tmp, store }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
