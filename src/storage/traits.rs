use crate::errors::NewsSumResult;

/// String-valued persistent slots, scoped to one origin.
///
/// Writes replace the whole value; there is no merge.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> NewsSumResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> NewsSumResult<()>;
}
