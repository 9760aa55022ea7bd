use rusqlite::OptionalExtension;

use crate::errors::NewsSumResult;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::KeyValueStore;

/// Persistent key/value slots for a single origin. Two origins sharing one
/// database never see each other's keys.
pub struct SqliteLocalStorage {
    storage: SqliteStorage,
    origin: String,
}

impl SqliteLocalStorage {
    pub fn new(storage: SqliteStorage, origin: &str) -> Self {
        Self {
            storage,
            origin: origin.to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl KeyValueStore for SqliteLocalStorage {
    fn get(&self, key: &str) -> NewsSumResult<Option<String>> {
        let conn = self.storage.connection()?;
        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE origin = ?1 AND key = ?2",
                (&self.origin, key),
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> NewsSumResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT INTO local_storage (origin, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(origin, key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            (&self.origin, key, value),
        )?;
        Ok(())
    }
}
