//! src/splitter.rs
use crate::error::PipelineError;
use crate::keys;
use crate::storage::ObjectStore;
use std::sync::Arc;

/// Stage one: partitions a source document into contiguous line-range
/// chunks, one store object per chunk.
pub struct Splitter {
    store: Arc<dyn ObjectStore>,
}

impl Splitter {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Splits the object at `source_key` into `chunk_count` chunks and
    /// returns their keys in index order.
    ///
    /// Each of the first `chunk_count - 1` chunks receives exactly
    /// `line_count / chunk_count` lines; the last chunk takes whatever
    /// remains, which is every line when the division floors to zero.
    /// Re-running with the same arguments overwrites each chunk with
    /// byte-identical content, so a failed run can simply be retried.
    #[tracing::instrument(name = "Split source", skip(self))]
    pub async fn split(
        &self,
        bucket: &str,
        source_key: &str,
        chunk_count: usize,
    ) -> Result<Vec<String>, PipelineError> {
        if chunk_count < 1 {
            return Err(PipelineError::InvalidArgument(
                "chunk count must be at least 1".to_string(),
            ));
        }

        let raw = self.store.get(bucket, source_key).await?;
        let text = String::from_utf8(raw).map_err(|err| PipelineError::InvalidInput {
            key: source_key.to_string(),
            source: err.into(),
        })?;

        let lines: Vec<&str> = text.lines().collect();
        let size = lines.len() / chunk_count;

        let mut chunk_keys = Vec::with_capacity(chunk_count);
        for i in 0..chunk_count {
            let part = if i < chunk_count - 1 {
                &lines[i * size..(i + 1) * size]
            } else {
                &lines[i * size..]
            };
            let chunk_key = keys::chunk_key(i);
            self.store
                .put(bucket, &chunk_key, part.join("\n").as_bytes())
                .await?;
            chunk_keys.push(chunk_key);
        }

        tracing::debug!(chunks = chunk_keys.len(), "source split");
        Ok(chunk_keys)
    }
}
