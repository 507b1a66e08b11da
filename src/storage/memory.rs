//! In-memory storage backend

use super::{Storage, StorageError};
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Storage kept in process memory; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: Value) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("nothing").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", &json!({"a": 1})).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!({"a": 1})));

        store.set("k", &json!([1, 2])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn with_entry_prepopulates() {
        let store = MemoryStore::new().with_entry("k", json!(true));
        assert_eq!(store.get("k").unwrap(), Some(json!(true)));
    }
}
