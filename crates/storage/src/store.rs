//! The store contract and typed read/write helpers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::StorageError;

/// A string key-value store.
///
/// This is deliberately the browser `localStorage` contract: get, set,
/// remove, nothing else. Implementations must tolerate concurrent writers
/// in other processes (last writer wins); they get no help coordinating.
pub trait Store {
    /// Read the raw value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium rejects the
    /// removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a typed value, falling back to the default.
///
/// "Key absent" and "value unparsable" are the same outcome by contract:
/// callers get `T::default()` and never branch on the difference. An
/// unparsable value is logged at `warn` since it usually means a record
/// shape changed under an old store.
pub fn read<T>(store: &dyn Store, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "unparsable value in store, using default");
            T::default()
        }
    }
}

/// Serialize a typed value and write it through.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the underlying write fails.
pub fn write<T>(store: &dyn Store, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &raw)
}
