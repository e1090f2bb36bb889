//! File storage port.

use async_trait::async_trait;

/// Pluggable upload backend. Implementations store the bytes somewhere
/// durable (local disk, object storage) and return an opaque reference
/// string - either a relative path or an absolute URL - that posts carry in
/// their `image` field.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileStoreError>;
}

/// File storage errors.
#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Write failed: {0}")]
    Io(String),
}
