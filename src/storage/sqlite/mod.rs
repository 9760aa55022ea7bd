mod connection;
mod local_storage;

pub use connection::SqliteStorage;
pub use local_storage::SqliteLocalStorage;
