//! Storage error type.

use thiserror::Error;

/// Errors that can occur when writing to the store.
///
/// Reads deliberately have no error type: a missing or unparsable value is
/// indistinguishable from an empty collection (see [`crate::read`]).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium rejected the write.
    #[error("storage i/o error for key {key}: {source}")]
    Io {
        /// Key being written.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The value could not be serialized to JSON.
    #[error("serialization error for key {key}: {source}")]
    Serialize {
        /// Key being written.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
