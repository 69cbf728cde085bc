//! tests/api/helpers.rs
use std::sync::Arc;
use std::sync::LazyLock;
use uuid::Uuid;
use wordmill::storage::{MemoryStorage, ObjectStore};
use wordmill::telemetry::init_tracing;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    init_tracing("tests::api").expect("Failed to setup tracing");
});

/// A fresh in-memory store and a uniquely named bucket seeded with one
/// source document.
pub async fn setup(source_text: &str) -> (Arc<MemoryStorage>, String) {
    LazyLock::force(&TRACING);
    let storage = Arc::new(MemoryStorage::new());
    let bucket = Uuid::new_v4().to_string();
    storage
        .put(&bucket, "input.txt", source_text.as_bytes())
        .await
        .expect("Failed to seed source document");
    (storage, bucket)
}

pub const TWO_LINE_SOURCE: &str = "the cat sat on the mat\nthe dog ran";
