//! ngv CLI - analyze NgRx projects and build action reference graphs.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `analyze` and `graph` implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr
//!
//! Command output (JSON) goes to stdout or to a file; everything else goes to
//! stderr so the output can be piped.
//!
//! # Example
//!
//! ```rust
//! use ngv_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
