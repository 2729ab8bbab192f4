use async_trait::async_trait;
use thiserror::Error;

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is unavailable (missing directory, read-only volume...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Access was denied by the platform.
    #[error("storage access denied: {0}")]
    PermissionDenied(String),

    /// Stored data is corrupt or invalid.
    #[error("storage data corrupt: {0}")]
    Corrupt(String),

    /// Other storage failures.
    #[error("storage failed: {0}")]
    Other(String),
}

/// Device-scoped key-value storage for the session credential.
///
/// Calls complete before returning, whatever the backend does internally.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Read a value, `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
