//! Display modes and the precomputed projections backing them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action_graph::ActionGraph;
use crate::error::GraphError;
use crate::graph::Graph;

/// Which projection of the graph is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Reducers as separate nodes.
    Reducers,
    /// Reducers folded into the actions feeding them.
    #[default]
    SplitReducers,
    NoReducers,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Reducers,
        DisplayMode::SplitReducers,
        DisplayMode::NoReducers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Reducers => "reducers",
            DisplayMode::SplitReducers => "split-reducers",
            DisplayMode::NoReducers => "no-reducers",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = GraphError;

    /// Accepts the kebab-case names and the unseparated viewer spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reducers" => Ok(DisplayMode::Reducers),
            "split-reducers" | "splitreducers" | "split_reducers" => Ok(DisplayMode::SplitReducers),
            "no-reducers" | "noreducers" | "no_reducers" => Ok(DisplayMode::NoReducers),
            _ => Err(GraphError::UnknownDisplayMode(s.to_string())),
        }
    }
}

/// The original graph plus both reducer projections, computed once.
#[derive(Debug, Clone)]
pub struct GraphViews {
    original: ActionGraph,
    split_reducers: ActionGraph,
    no_reducers: ActionGraph,
}

impl GraphViews {
    pub fn new(original: ActionGraph) -> Self {
        let split_reducers = original.with_split_reducers();
        let no_reducers = original.without_reducers();
        Self {
            original,
            split_reducers,
            no_reducers,
        }
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self::new(ActionGraph::from_graph(graph))
    }

    pub fn original(&self) -> &ActionGraph {
        &self.original
    }

    pub fn get(&self, mode: DisplayMode) -> &ActionGraph {
        match mode {
            DisplayMode::Reducers => &self.original,
            DisplayMode::SplitReducers => &self.split_reducers,
            DisplayMode::NoReducers => &self.no_reducers,
        }
    }
}
