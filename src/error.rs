use thiserror::Error;

/// Ways an upstream fetch can fail. Every variant means the same thing to
/// the pipeline: the upstream was unavailable for this attempt, and there
/// are no retries.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
