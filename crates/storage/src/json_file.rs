//! File-backed store: one JSON document per key.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{StorageError, Store};

/// A store that keeps each key in its own file under a data directory.
///
/// `salonCart` lives in `<dir>/salonCart.json` and so on. Writes replace
/// the whole file, which gives the same last-writer-wins behaviour the
/// collections were designed around. Keys are fixed constants (see
/// [`crate::keys`]), so no path sanitization is attempted.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory this store reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{read, write};

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/data");
        let _store = JsonFileStore::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_get_missing_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();
        assert!(store.get("salonCart").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();
        store.set("salonCart", "[]").unwrap();
        assert_eq!(store.get("salonCart").as_deref(), Some("[]"));
        assert!(tmp.path().join("salonCart.json").is_file());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();
        store.remove("salonCart").unwrap();
    }

    #[test]
    fn test_typed_roundtrip_through_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();
        write(&store, "k", &vec![10_i64, 20]).unwrap();

        // A second handle over the same directory sees the write.
        let other = JsonFileStore::open(tmp.path()).unwrap();
        let back: Vec<i64> = read(&other, "k");
        assert_eq!(back, vec![10, 20]);
    }
}
