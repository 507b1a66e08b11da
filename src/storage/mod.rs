//! Persisted key-value storage
//!
//! The game persists a single JSON document (the high-score ledger) under a
//! well-known key. Backends only need opaque get/set of JSON values.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;
use std::io;
use thiserror::Error;

/// Error type for storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Opaque key-value storage of JSON blobs
pub trait Storage {
    /// Read the value stored under `key`, `None` if nothing was stored
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read or holds malformed data.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;
}
