//! # ngv-graph
//!
//! Pure data structures for NgRx action graphs.
//!
//! This crate holds everything downstream of source analysis: the exported
//! analysis schema, the [`Usage`] sum type, the graph builder that turns an
//! exported analysis into a node/link [`Graph`], and [`ActionGraph`], which
//! derives the projections a viewer displays. It performs no I/O.
//!
//! ## Overview
//!
//! ```text
//! Vec<ActionExport> ──decode──▶ Graph ──▶ ActionGraph
//!                                             │
//!                    ┌────────────────────────┼──────────────────────┐
//!                    ▼                        ▼                      ▼
//!                 clone()           with_split_reducers()    without_reducers()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ngv_graph::{ActionGraph, NodeKind, decode_json};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"[{
//!     "name": "Add",
//!     "filePath": "p/1",
//!     "line": 3,
//!     "references": [{
//!         "filePath": "p/2",
//!         "line": 10,
//!         "usages": [{ "type": "METHOD", "name": "dispatch" }]
//!     }]
//! }]"#;
//!
//! let graph = ActionGraph::from_graph(decode_json(json, 1)?);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(
//!     graph.get_node_by_id("Method::p/2::dispatch").map(|n| n.kind),
//!     Some(NodeKind::Method)
//! );
//! # Ok(())
//! # }
//! ```

pub mod action_graph;
pub mod decode;
pub mod display;
pub mod error;
pub mod export;
pub mod graph;
pub mod statistics;
pub mod usage;
pub mod visibility;

pub use action_graph::ActionGraph;
pub use decode::{
    action_id, decode, decode_json, dominant_usage, reducer_display_name, reference_id,
};
pub use display::{DisplayMode, GraphViews};
pub use error::{GraphError, Result};
pub use export::{ActionExport, ReferenceExport};
pub use graph::{Graph, Link, LinkEnd, LinkStatus, Node, NodeKind};
pub use statistics::GraphStatistics;
pub use usage::{USAGE_PRIORITY, Usage, UsageKind};
pub use visibility::ActionTree;

#[cfg(test)]
mod tests;
