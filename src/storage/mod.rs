pub mod traits;
#[cfg(test)]
pub mod memory;
pub mod sqlite;

pub use traits::KeyValueStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::{SqliteLocalStorage, SqliteStorage};
