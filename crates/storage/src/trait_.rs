//! Key-value store trait abstraction.

use async_trait::async_trait;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error from the underlying store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Asynchronous, string-keyed, text-valued persistence primitive.
///
/// This is the contract of a device-local key-value store: individual
/// per-key reads and writes are durable and appear atomic to a single
/// caller. Nothing is promised across a read-then-write pair; callers
/// that read, modify, and write back race under last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. An absent key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
