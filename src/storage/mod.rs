//! src/storage/mod.rs
//!
//! The object-store capability every stage receives by injection. Stages
//! only ever see the two primitives; which backend sits behind them is the
//! caller's choice (S3 in production, the in-memory store in tests).
use crate::error::PipelineError;

mod memory;
mod s3;

pub use memory::MemoryStorage;
pub use s3::S3Storage;

#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the object at `bucket`/`key`, failing with
    /// [`PipelineError::NotFound`] when it doesn't exist.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PipelineError>;

    /// Writes `data` to `bucket`/`key`, overwriting any previous value.
    async fn put(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), PipelineError>;
}
