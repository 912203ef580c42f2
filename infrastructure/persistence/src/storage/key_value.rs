use async_trait::async_trait;

use super::error::StorageError;

/// Durable string-to-string storage, the shape of the async key-value stores
/// mobile platforms offer.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `None` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces whatever was stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
