use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::{NewsSumError, NewsSumResult};
use crate::storage::traits::KeyValueStore;

/// Non-persistent store used by the unit tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> NewsSumResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| NewsSumError::StorageUnavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> NewsSumResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| NewsSumError::StorageUnavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("subs").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("last", "hk-rthk").unwrap();
        store.set("last", "uk-bbc").unwrap();
        assert_eq!(store.get("last").unwrap().as_deref(), Some("uk-bbc"));
    }
}
