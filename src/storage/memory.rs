//! src/storage/memory.rs
use crate::error::PipelineError;
use crate::storage::ObjectStore;
use dashmap::DashMap;

/// In-process [`ObjectStore`] backend.
///
/// Exists so the pipeline can be exercised with no network dependency; the
/// test suite builds one of these where production wires up S3.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    buckets: DashMap<String, DashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys currently stored under `bucket`, sorted.
    pub fn list(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = match self.buckets.get(bucket) {
            Some(objects) => objects.iter().map(|entry| entry.key().clone()).collect(),
            None => Vec::new(),
        };
        keys.sort();
        keys
    }

    pub fn object_count(&self, bucket: &str) -> usize {
        self.buckets
            .get(bucket)
            .map(|objects| objects.len())
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStorage {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PipelineError> {
        self.buckets
            .get(bucket)
            .and_then(|objects| objects.get(key).map(|entry| entry.value().clone()))
            .ok_or_else(|| PipelineError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), PipelineError> {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
