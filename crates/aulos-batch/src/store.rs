#![forbid(unsafe_code)]

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use thiserror::Error;

/// One object-store write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutRequest {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    /// Opaque provenance tag string, `key=value&key=value`.
    pub tagging: Option<String>,
}

#[derive(Debug, Error)]
#[error("object store put failed: {0}")]
pub struct StoreError(pub String);

pub type StoreResult<T> = Result<T, StoreError>;

/// Object-storage seam: a shared, stateless client safe for reuse across
/// records without per-record locking.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, request: PutRequest) -> StoreResult<()>;
}

/// In-memory object store.
///
/// Keeps accepted writes in insertion order; individual puts can be scripted
/// to fail. Useful as a test double and for dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<Vec<PutRequest>>,
    fail_keys: Mutex<Vec<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject future puts whose key contains `needle`.
    pub fn fail_key(&self, needle: impl Into<String>) {
        self.fail_keys.lock().push(needle.into());
    }

    /// Accepted writes, in insertion order.
    #[must_use]
    pub fn objects(&self) -> Vec<PutRequest> {
        self.objects.lock().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, request: PutRequest) -> StoreResult<()> {
        if self
            .fail_keys
            .lock()
            .iter()
            .any(|needle| request.key.contains(needle))
        {
            return Err(StoreError(format!("access denied for {}", request.key)));
        }
        self.objects.lock().push(request);
        Ok(())
    }
}
