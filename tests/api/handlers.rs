//! tests/api/handlers.rs
use crate::helpers::{TWO_LINE_SOURCE, setup};
use claims::{assert_matches, assert_ok};
use wordmill::error::PipelineError;
use wordmill::handlers;
use wordmill::storage::ObjectStore;
use std::sync::Arc;

fn split_params(bucket: &str, chunks: usize) -> handlers::SplitParams {
    serde_json::from_value(serde_json::json!({
        "bucket": bucket,
        "key": "input.txt",
        "chunks": chunks,
    }))
    .expect("Failed to build split params")
}

#[tokio::test]
async fn you_should_be_able_to_drive_all_three_stages_through_the_handlers() {
    let (storage, bucket) = setup(TWO_LINE_SOURCE).await;
    let store: Arc<dyn ObjectStore> = storage;

    let split = assert_ok!(handlers::split(store.clone(), split_params(&bucket, 2)).await);
    assert_eq!(split.chunks, vec!["chunks/chunk0.txt", "chunks/chunk1.txt"]);

    let mut map_outputs = Vec::new();
    for chunk_key in &split.chunks {
        let response = assert_ok!(
            handlers::map(
                store.clone(),
                handlers::MapParams {
                    bucket: bucket.clone(),
                    key: chunk_key.clone(),
                },
            )
            .await
        );
        map_outputs.push(response.map_output);
    }
    assert_eq!(map_outputs, vec!["maps/chunk0.json", "maps/chunk1.json"]);

    let reduce = assert_ok!(
        handlers::reduce(
            store,
            handlers::ReduceParams {
                bucket,
                keys: map_outputs,
            },
        )
        .await
    );
    assert_eq!(reduce.result, "final/result.json");
}

#[tokio::test]
async fn splitting_a_missing_source_should_surface_not_found() {
    let (storage, bucket) = setup(TWO_LINE_SOURCE).await;

    let err = handlers::split(
        storage,
        serde_json::from_value(serde_json::json!({
            "bucket": bucket,
            "key": "no-such-source.txt",
        }))
        .unwrap(),
    )
    .await
    .unwrap_err();
    assert_matches!(err, PipelineError::NotFound { key } if key == "no-such-source.txt");
}

#[tokio::test]
async fn mapping_a_missing_chunk_should_surface_not_found() {
    let (storage, bucket) = setup(TWO_LINE_SOURCE).await;

    let err = handlers::map(
        storage,
        handlers::MapParams {
            bucket,
            key: "chunks/chunk5.txt".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, PipelineError::NotFound { key } if key == "chunks/chunk5.txt");
}
