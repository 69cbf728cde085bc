//! src/error.rs

/// Error taxonomy shared by every pipeline stage and the store backends.
///
/// Each failing variant names the key it failed on, so a caller retrying a
/// batch knows exactly which object to look at.
#[derive(thiserror::Error)]
pub enum PipelineError {
    #[error("object not found: {key}")]
    NotFound { key: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid content for object: {key}")]
    InvalidInput {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("storage failure for object: {key}")]
    UpstreamFailure {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

impl PipelineError {
    /// The store key the failure is about, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            PipelineError::NotFound { key }
            | PipelineError::InvalidInput { key, .. }
            | PipelineError::UpstreamFailure { key, .. } => Some(key),
            PipelineError::InvalidArgument(_) => None,
        }
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
