//! Error types for graph decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A required top-level key was absent or `null`.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Malformed JSON, including enum values this crate does not know.
    #[error("invalid graph data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown display mode '{0}' (expected reducers, split-reducers or no-reducers)")]
    UnknownDisplayMode(String),
}
