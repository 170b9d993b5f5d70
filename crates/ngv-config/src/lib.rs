//! # ngv-config
//!
//! Analyzer options for ngv and the machinery to load them.
//!
//! Options come from four layers, later layers winning:
//! defaults, a config file (`ngv.config.json` / `ngv.config.toml`),
//! `NGV_*` environment variables, and explicit overrides (the CLI).
//!
//! The regular-expression options are compiled once into [`PathFilters`],
//! which is what the analysis pipeline receives.

pub mod discovery;
pub mod error;
pub mod filters;
pub mod options;

pub use discovery::{ConfigDiscovery, load_options};
pub use error::{ConfigError, Result};
pub use filters::PathFilters;
pub use options::{AnalyzerOptions, DEFAULT_REDUCER_NAME_DEPTH, OptionOverrides};
