//! src/pipeline.rs
use crate::error::PipelineError;
use crate::mapper::Mapper;
use crate::reducer::Reducer;
use crate::splitter::Splitter;
use crate::storage::ObjectStore;
use std::sync::Arc;
use std::time::Instant;

/// Keys produced by one full pipeline run, stage by stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub chunk_keys: Vec<String>,
    pub map_output_keys: Vec<String>,
    pub final_key: String,
}

/// Single-shot driver: split once, map every chunk concurrently, reduce
/// once. Stages still only talk through the store; this just saves a
/// caller from sequencing the three invocations by hand.
pub struct Pipeline {
    store: Arc<dyn ObjectStore>,
}

impl Pipeline {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "Run pipeline", skip(self))]
    pub async fn run(
        &self,
        bucket: &str,
        source_key: &str,
        chunk_count: usize,
    ) -> Result<PipelineOutcome, PipelineError> {
        let split_started = Instant::now();
        let chunk_keys = Splitter::new(self.store.clone())
            .split(bucket, source_key, chunk_count)
            .await?;
        tracing::info!(
            elapsed = ?split_started.elapsed(),
            chunks = chunk_keys.len(),
            "split stage complete"
        );

        // Mappers touch disjoint keys, so they can all run at once.
        let map_started = Instant::now();
        let mut handles = Vec::with_capacity(chunk_keys.len());
        for chunk_key in &chunk_keys {
            let mapper = Mapper::new(self.store.clone());
            let bucket = bucket.to_string();
            let chunk_key = chunk_key.clone();
            handles.push((
                chunk_key.clone(),
                tokio::spawn(async move { mapper.map(&bucket, &chunk_key).await }),
            ));
        }

        let mut map_output_keys = Vec::with_capacity(handles.len());
        for (chunk_key, handle) in handles {
            let map_output_key = handle
                .await
                .map_err(|err| PipelineError::UpstreamFailure {
                    key: chunk_key,
                    source: err.into(),
                })??;
            map_output_keys.push(map_output_key);
        }
        tracing::info!(elapsed = ?map_started.elapsed(), "map stage complete");

        let reduce_started = Instant::now();
        let final_key = Reducer::new(self.store.clone())
            .reduce(bucket, &map_output_keys)
            .await?;
        tracing::info!(elapsed = ?reduce_started.elapsed(), "reduce stage complete");

        Ok(PipelineOutcome {
            chunk_keys,
            map_output_keys,
            final_key,
        })
    }
}
