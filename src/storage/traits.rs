//! Trait abstraction for local key/value storage to enable mocking in tests

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing a storage slot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String key/value store backing the saved form state
#[cfg_attr(test, mockall::automock)]
pub trait FormStorage: Send {
    /// Read the value under `key`, `None` when it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
