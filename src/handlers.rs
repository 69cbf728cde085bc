//! src/handlers.rs
//!
//! Transport-agnostic request surface. Whatever routing layer sits in
//! front of a stage hands it parsed parameters and serializes whatever
//! comes back; nothing here knows about HTTP.
use crate::error::PipelineError;
use crate::mapper::Mapper;
use crate::reducer::Reducer;
use crate::splitter::Splitter;
use crate::storage::ObjectStore;
use std::sync::Arc;

pub const DEFAULT_CHUNK_COUNT: usize = 3;

fn default_chunk_count() -> usize {
    DEFAULT_CHUNK_COUNT
}

#[derive(Debug, serde::Deserialize)]
pub struct SplitParams {
    pub bucket: String,
    pub key: String,
    #[serde(default = "default_chunk_count")]
    pub chunks: usize,
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct SplitResponse {
    pub chunks: Vec<String>,
}

pub async fn split(
    store: Arc<dyn ObjectStore>,
    params: SplitParams,
) -> Result<SplitResponse, PipelineError> {
    let chunks = Splitter::new(store)
        .split(&params.bucket, &params.key, params.chunks)
        .await?;
    Ok(SplitResponse { chunks })
}

#[derive(Debug, serde::Deserialize)]
pub struct MapParams {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct MapResponse {
    pub map_output: String,
}

pub async fn map(
    store: Arc<dyn ObjectStore>,
    params: MapParams,
) -> Result<MapResponse, PipelineError> {
    let map_output = Mapper::new(store).map(&params.bucket, &params.key).await?;
    Ok(MapResponse { map_output })
}

#[derive(Debug, serde::Deserialize)]
pub struct ReduceParams {
    pub bucket: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct ReduceResponse {
    pub result: String,
}

pub async fn reduce(
    store: Arc<dyn ObjectStore>,
    params: ReduceParams,
) -> Result<ReduceResponse, PipelineError> {
    let result = Reducer::new(store)
        .reduce(&params.bucket, &params.keys)
        .await?;
    Ok(ReduceResponse { result })
}
