//! src/mapper.rs
use crate::error::PipelineError;
use crate::frequency::TermFrequencyMap;
use crate::keys;
use crate::storage::ObjectStore;
use std::sync::Arc;

/// Stage two: turns one chunk into a term-frequency object.
///
/// The output is a pure function of the chunk's content, so re-running a
/// mapper overwrites its output with identical bytes.
pub struct Mapper {
    store: Arc<dyn ObjectStore>,
}

impl Mapper {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "Map chunk", skip(self))]
    pub async fn map(&self, bucket: &str, chunk_key: &str) -> Result<String, PipelineError> {
        let raw = self.store.get(bucket, chunk_key).await?;
        let text = String::from_utf8(raw).map_err(|err| PipelineError::InvalidInput {
            key: chunk_key.to_string(),
            source: err.into(),
        })?;

        let counts = TermFrequencyMap::from_text(&text);
        let output_key = keys::map_output_key(chunk_key);
        let body = counts
            .to_json()
            .map_err(|err| PipelineError::InvalidInput {
                key: output_key.clone(),
                source: err.into(),
            })?;

        self.store.put(bucket, &output_key, &body).await?;
        tracing::debug!(tokens = counts.len(), "chunk mapped");
        Ok(output_key)
    }
}
