use async_trait::async_trait;
use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{0}")]
    Backend(#[from] object_store::Error),
}

/// Write access to the destination bucket. The relay only ever writes;
/// key collisions silently overwrite the prior object.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), StorageError>;
}

/// Google Cloud Storage backend. The bucket is fixed at construction
/// time and the client is shared read-only across requests.
pub struct GcsStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl GcsStorage {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: String) -> Self {
        Self { store, bucket }
    }
}

#[async_trait]
impl ObjectStorage for GcsStorage {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        let location = Path::from(key);
        self.store
            .put(&location, PutPayload::from(data))
            .await?;
        tracing::debug!("wrote object {} to bucket {}", location, self.bucket);
        Ok(())
    }
}

/// In-memory backend for tests and local development.
pub struct MemoryStorage {
    store: InMemory,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: InMemory::new(),
        }
    }

    /// Read an object back, if present. Used by tests to verify relayed
    /// content.
    pub async fn fetch(&self, key: &str) -> Option<Bytes> {
        let result = self.store.get(&Path::from(key)).await.ok()?;
        result.bytes().await.ok()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        self.store
            .put(&Path::from(key), PutPayload::from(data))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage
            .put_object("report.pdf", Bytes::from_static(b"%PDF-1.4"))
            .await
            .unwrap();

        let data = storage.fetch("report.pdf").await.unwrap();
        assert_eq!(&data[..], b"%PDF-1.4");
        assert!(storage.fetch("missing.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage
            .put_object("notes.txt", Bytes::from_static(b"first"))
            .await
            .unwrap();
        storage
            .put_object("notes.txt", Bytes::from_static(b"second"))
            .await
            .unwrap();

        let data = storage.fetch("notes.txt").await.unwrap();
        assert_eq!(&data[..], b"second");
    }
}
