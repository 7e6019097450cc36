//! File-backed storage: one JSON document per key under a data directory

use super::traits::{FormStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`; characters unsafe in file names become `_`
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl FormStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write then rename so a crash never leaves a half-written slot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("carbon-form-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_round_trip_creates_directory() {
        let dir = scratch_dir();
        let mut storage = FileStorage::new(&dir);

        assert!(storage.get_item("carbonFormData").unwrap().is_none());
        storage.set_item("carbonFormData", r#"{"Diet":"vegan"}"#).unwrap();
        assert_eq!(
            storage.get_item("carbonFormData").unwrap().as_deref(),
            Some(r#"{"Diet":"vegan"}"#)
        );
        assert!(dir.join("carbonFormData.json").exists());
        assert!(!dir.join("carbonFormData.json.tmp").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_key_is_sanitized() {
        let storage = FileStorage::new("/tmp/x");
        assert_eq!(
            storage.path_for("../evil key"),
            PathBuf::from("/tmp/x/___evil_key.json")
        );
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = scratch_dir();
        fs::create_dir_all(dir.join("slot.json")).unwrap();
        let storage = FileStorage::new(&dir);

        let err = storage.get_item("slot").unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));

        let _ = fs::remove_dir_all(dir);
    }
}
