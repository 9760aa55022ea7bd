use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::errors::NewsSumResult;
use crate::logger::{LogLevel, Logger};
use crate::storage::traits::KeyValueStore;

const SUBSCRIPTIONS_KEY: &str = "subs";
const LAST_READ_KEY: &str = "last";

/// Membership marker; only the presence of a key matters.
const MEMBER: u8 = 1;

/// The user's subscribed sources and last-read source.
///
/// Nothing is cached: every read goes back to storage and validates what
/// it finds there.
pub struct SubscriptionStore<S: KeyValueStore> {
    store: S,
    logger: Logger,
}

impl<S: KeyValueStore> SubscriptionStore<S> {
    pub fn new(store: S, logger: Logger) -> Self {
        Self { store, logger }
    }

    /// Current subscriptions. Missing or corrupt state reads as empty.
    pub fn subscriptions(&self) -> BTreeSet<String> {
        match self.read_subscriptions() {
            Ok(subs) => subs,
            Err(reason) => {
                self.logger.log(
                    &format!("Problem retrieving subscription: {}", reason),
                    LogLevel::Info,
                );
                BTreeSet::new()
            }
        }
    }

    fn read_subscriptions(&self) -> Result<BTreeSet<String>, String> {
        let raw = self
            .store
            .get(SUBSCRIPTIONS_KEY)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "nothing stored yet".to_string())?;

        let parsed: Map<String, Value> =
            serde_json::from_str(&raw).map_err(|e| format!("{} in {:?}", e, raw))?;

        Ok(parsed.into_iter().map(|(key, _)| key).collect())
    }

    /// Replace the whole subscription set with `list`
    pub fn update_subscription<T: AsRef<str>>(&self, list: &[T]) -> NewsSumResult<()> {
        let subs: Map<String, Value> = list
            .iter()
            .map(|sub| (sub.as_ref().to_string(), Value::from(MEMBER)))
            .collect();

        self.store
            .set(SUBSCRIPTIONS_KEY, &Value::Object(subs).to_string())
    }

    pub fn is_subscribed(&self, source_path: &str) -> bool {
        self.subscriptions().contains(source_path)
    }

    /// Raw last-read value, `None` if never set.
    pub fn get_last_read(&self) -> Option<String> {
        match self.store.get(LAST_READ_KEY) {
            Ok(value) => value,
            Err(e) => {
                self.logger
                    .log(&format!("Problem retrieving last read: {}", e), LogLevel::Warn);
                None
            }
        }
    }

    pub fn set_last_read(&self, source_path: &str) -> NewsSumResult<()> {
        self.store.set(LAST_READ_KEY, source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use crate::errors::NewsSumError;
    use crate::logger::capture::LogCapture;
    use crate::storage::traits::MockKeyValueStore;
    use crate::storage::{MemoryStore, SqliteLocalStorage, SqliteStorage};

    fn setup() -> SubscriptionStore<MemoryStore> {
        SubscriptionStore::new(MemoryStore::new(), Logger::new(BuildMode::Development))
    }

    fn set_of(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_subscriptions_empty_when_never_written() {
        let store = setup();
        assert!(store.subscriptions().is_empty());
    }

    #[test]
    fn test_update_collapses_duplicates() {
        let store = setup();
        store.update_subscription(&["a", "a", "b"]).unwrap();
        assert_eq!(store.subscriptions(), set_of(&["a", "b"]));
    }

    #[test]
    fn test_update_replaces_previous_set() {
        let store = setup();
        store.update_subscription(&["hk-rthk", "uk-bbc"]).unwrap();
        store.update_subscription(&["ca-cbc".to_string()]).unwrap();

        assert_eq!(store.subscriptions(), set_of(&["ca-cbc"]));
        assert!(store.is_subscribed("ca-cbc"));
        assert!(!store.is_subscribed("uk-bbc"));
    }

    #[test]
    fn test_update_with_empty_list() {
        let store = setup();
        store.update_subscription(&["a"]).unwrap();
        store.update_subscription::<&str>(&[]).unwrap();
        assert!(store.subscriptions().is_empty());
    }

    #[test]
    fn test_persisted_format_uses_member_sentinel() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .withf(|key, value| key == "subs" && value == r#"{"a":1,"b":1}"#)
            .times(1)
            .returning(|_, _| Ok(()));

        let store = SubscriptionStore::new(mock, Logger::default());
        store.update_subscription(&["b", "a", "b"]).unwrap();
    }

    #[test]
    fn test_values_carry_no_meaning() {
        let memory = MemoryStore::new();
        memory.set("subs", r#"{"a":1,"b":0,"c":null}"#).unwrap();

        let store = SubscriptionStore::new(memory, Logger::default());
        assert_eq!(store.subscriptions(), set_of(&["a", "b", "c"]));
    }

    #[test]
    fn test_corrupt_json_reads_as_empty() {
        let memory = MemoryStore::new();
        memory.set("subs", "{not json").unwrap();

        let store = SubscriptionStore::new(memory, Logger::new(BuildMode::Development));
        let logs = LogCapture::start();

        assert!(store.subscriptions().is_empty());
        assert!(logs
            .position("INFO", "Problem retrieving subscription: ")
            .is_some());
    }

    #[test]
    fn test_non_object_json_reads_as_empty() {
        let memory = MemoryStore::new();
        memory.set("subs", r#"["a","b"]"#).unwrap();

        let store = SubscriptionStore::new(memory, Logger::default());
        assert!(store.subscriptions().is_empty());
    }

    #[test]
    fn test_storage_failure_reads_as_empty() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(NewsSumError::StorageUnavailable("locked".to_string())));

        let store = SubscriptionStore::new(mock, Logger::default());
        assert!(store.subscriptions().is_empty());
        assert_eq!(store.get_last_read(), None);
    }

    #[test]
    fn test_recovers_after_corruption_is_overwritten() {
        let memory = MemoryStore::new();
        memory.set("subs", "garbage").unwrap();

        let store = SubscriptionStore::new(memory, Logger::default());
        assert!(store.subscriptions().is_empty());

        store.update_subscription(&["a"]).unwrap();
        assert_eq!(store.subscriptions(), set_of(&["a"]));
    }

    #[test]
    fn test_last_read_round_trip() {
        let store = setup();
        assert_eq!(store.get_last_read(), None);

        store.set_last_read("foo").unwrap();
        assert_eq!(store.get_last_read().as_deref(), Some("foo"));
    }

    #[test]
    fn test_last_read_is_raw() {
        let store = setup();
        store.set_last_read("").unwrap();
        assert_eq!(store.get_last_read().as_deref(), Some(""));
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .returning(|_, _| Err(NewsSumError::StorageUnavailable("read-only".to_string())));

        let store = SubscriptionStore::new(mock, Logger::default());
        assert!(store.set_last_read("foo").is_err());
        assert!(store.update_subscription(&["a"]).is_err());
    }

    #[test]
    fn test_sqlite_backed_store() {
        let local = SqliteLocalStorage::new(SqliteStorage::in_memory().unwrap(), "origin");
        let store = SubscriptionStore::new(local, Logger::default());

        store.update_subscription(&["uk-bbc", "hk-rthk"]).unwrap();
        store.set_last_read("uk-bbc").unwrap();

        assert_eq!(store.subscriptions(), set_of(&["hk-rthk", "uk-bbc"]));
        assert_eq!(store.get_last_read().as_deref(), Some("uk-bbc"));
    }
}
