//! Local-disk file store.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::ports::{FileStore, FileStoreError};

/// Stores uploads on the local filesystem and returns references of the form
/// `<public_prefix>/<uuid>_<name>`. Object-storage backends implement the
/// same port and return absolute URLs instead.
pub struct LocalDiskStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Strip anything that could traverse out of the upload root.
    fn sanitize(filename: &str) -> Result<String, FileStoreError> {
        let name: String = filename
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();

        if name.is_empty() || name.chars().all(|c| c == '.') {
            return Err(FileStoreError::InvalidFilename(filename.to_string()));
        }
        Ok(name)
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileStoreError> {
        let name = Self::sanitize(filename)?;
        let stored_name = format!("{}_{}", Uuid::new_v4(), name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        let path = self.root.join(&stored_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        tracing::debug!(file = %stored_name, size = bytes.len(), "Stored upload");

        Ok(format!("{}/{}", self.public_prefix, stored_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_and_returns_reference() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let reference = store.store("cat.jpg", b"image-bytes").await.unwrap();

        assert!(reference.starts_with("/uploads/"));
        assert!(reference.ends_with("_cat.jpg"));

        let stored_name = reference.strip_prefix("/uploads/").unwrap();
        let on_disk = tokio::fs::read(dir.path().join(stored_name)).await.unwrap();
        assert_eq!(on_disk, b"image-bytes");
    }

    #[tokio::test]
    async fn strips_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let reference = store.store("../../etc/passwd", b"x").await.unwrap();

        // Separators are gone; the file lands inside the root.
        assert!(!reference.strip_prefix("/uploads/").unwrap().contains('/'));
    }

    #[tokio::test]
    async fn rejects_empty_filename() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let result = store.store("///", b"x").await;
        assert!(matches!(result, Err(FileStoreError::InvalidFilename(_))));
    }
}
