//! src/main.rs
use anyhow::Context;
use std::sync::Arc;
use wordmill::configuration::get_configuration;
use wordmill::pipeline::Pipeline;
use wordmill::storage::S3Storage;
use wordmill::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let tracer_provider = init_tracing("wordmill")?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let storage = Arc::new(S3Storage::new(&configuration.storage));
    storage
        .ensure_bucket(&configuration.pipeline.bucket)
        .await
        .context("Failed to ensure the pipeline bucket exists")?;

    let outcome = Pipeline::new(storage)
        .run(
            &configuration.pipeline.bucket,
            &configuration.pipeline.source_key,
            configuration.pipeline.chunk_count,
        )
        .await
        .context("Pipeline run failed")?;
    tracing::info!(final_key = %outcome.final_key, "pipeline complete");

    if let Err(err) = tracer_provider.shutdown() {
        tracing::warn!("Failed to shut down tracer provider: {err}");
    }
    Ok(())
}
