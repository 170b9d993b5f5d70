//! Command implementations for the ngv CLI.
//!
//! - [`analyze`] - Analyze a folder and export the actions found
//! - [`graph`] - Build and project the action graph
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod analyze;
pub mod graph;
pub(crate) mod utils;

pub use analyze::execute as analyze_execute;
pub use graph::execute as graph_execute;
