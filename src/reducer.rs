//! src/reducer.rs
use crate::error::PipelineError;
use crate::frequency::TermFrequencyMap;
use crate::keys;
use crate::storage::ObjectStore;
use std::sync::Arc;

/// Stage three: merges an arbitrary list of map outputs into one aggregate.
///
/// The fold is fail-fast: the first key that can't be fetched or parsed
/// aborts the whole invocation, and nothing reaches the store. The final
/// object is recomputed from scratch on every call rather than updated in
/// place, which is what makes blind retries safe.
pub struct Reducer {
    store: Arc<dyn ObjectStore>,
}

impl Reducer {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Merges the objects named by `map_output_keys`, in the order given,
    /// and writes the aggregate to the fixed final key.
    ///
    /// Merging is commutative and associative, so any permutation of the
    /// same keys produces the same aggregate. Duplicate keys are summed
    /// again; deduplication is the caller's business.
    #[tracing::instrument(
        name = "Reduce map outputs",
        skip(self, map_output_keys),
        fields(inputs = map_output_keys.len())
    )]
    pub async fn reduce(
        &self,
        bucket: &str,
        map_output_keys: &[String],
    ) -> Result<String, PipelineError> {
        let mut aggregate = TermFrequencyMap::new();

        for key in map_output_keys {
            let raw = self.store.get(bucket, key).await?;
            let counts =
                TermFrequencyMap::from_json(&raw).map_err(|err| PipelineError::InvalidInput {
                    key: key.clone(),
                    source: err.into(),
                })?;
            aggregate.merge(counts);
        }

        let body = aggregate
            .to_json()
            .map_err(|err| PipelineError::InvalidInput {
                key: keys::FINAL_KEY.to_string(),
                source: err.into(),
            })?;
        self.store.put(bucket, keys::FINAL_KEY, &body).await?;

        tracing::debug!(tokens = aggregate.len(), "aggregate written");
        Ok(keys::FINAL_KEY.to_string())
    }
}
