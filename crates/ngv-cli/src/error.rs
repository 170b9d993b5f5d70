//! Error handling for the ngv CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`, and
//! [`ResultExt`] attaches a path, a hint or a message on the way up.
//! `main` turns the final error into a miette report.
//!
//! # Example
//!
//! ```rust,no_run
//! use ngv_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_analysis(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run `ngv analyze --save <FILE>` first")
//! }
//! ```

use std::path::PathBuf;

use miette::Report;
use ngv_analysis::AnalysisError;
use ngv_config::ConfigError;
use ngv_graph::GraphError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Option loading or pattern compilation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// The analysis file could not be turned into a graph
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a CLI error into a miette report, with help where one is known.
pub fn cli_error_to_miette(err: CliError) -> Report {
    // Patterns are compiled inside the analysis, so its config errors are
    // reported like the CLI's own.
    let err = match err {
        CliError::Analysis(AnalysisError::Config(e)) => CliError::Config(e),
        other => other,
    };
    match err {
        CliError::Config(ConfigError::InvalidPattern { field, pattern, message }) => {
            miette::miette!(
                help = format!("--{field} takes a regular expression"),
                "Invalid {} pattern '{}': {}",
                field,
                pattern,
                message
            )
        }
        CliError::Config(e) => miette::miette!(
            help = "Check ngv.config.json / ngv.config.toml and NGV_* environment variables",
            "Configuration error: {}",
            e
        ),
        CliError::Analysis(AnalysisError::FolderNotFound(folder)) => miette::miette!(
            help = "Pass the folder containing the TypeScript sources",
            "Folder not found: {}",
            folder.display()
        ),
        CliError::Graph(GraphError::Json(e)) => miette::miette!(
            help = "The input must be the JSON written by `ngv analyze`",
            "Invalid analysis file: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}
