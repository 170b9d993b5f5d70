//! Error types for source analysis.

use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::SyntaxKind;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to parse '{path}': {errors} syntax error(s)")]
    Parse { path: String, errors: usize },

    #[error(transparent)]
    Config(#[from] ngv_config::ConfigError),

    #[error("failed to serialize analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The front end could not give a node a type.
///
/// Discovery and classification treat this as "does not match"; it is never
/// surfaced from [`analyze`](crate::analyze).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("cannot resolve the type of {kind:?} `{text}`")]
    Unresolved { kind: SyntaxKind, text: String },

    #[error("no type information for {0:?} nodes")]
    Unsupported(SyntaxKind),
}
