//! Graph statistics for summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action_graph::ActionGraph;
use crate::graph::NodeKind;

/// Node counts per kind and link count of one graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub link_count: usize,
    pub actions: usize,
    pub effects: usize,
    pub methods: usize,
    pub reducers: usize,
    pub unknown: usize,
    pub hidden: usize,
}

impl GraphStatistics {
    pub fn from_graph(graph: &ActionGraph) -> Self {
        let mut stats = Self {
            link_count: graph.links().len(),
            ..Self::default()
        };

        for node in graph.nodes() {
            stats.node_count += 1;
            if node.hidden {
                stats.hidden += 1;
            }
            match node.kind {
                NodeKind::Action => stats.actions += 1,
                NodeKind::Effect => stats.effects += 1,
                NodeKind::Method => stats.methods += 1,
                NodeKind::Reducer => stats.reducers += 1,
                NodeKind::Unknown => stats.unknown += 1,
            }
        }

        stats
    }
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} actions, {} effects, {} methods, {} reducers, {} unknown), {} links",
            self.node_count,
            self.actions,
            self.effects,
            self.methods,
            self.reducers,
            self.unknown,
            self.link_count
        )?;
        if self.hidden > 0 {
            write!(f, ", {} hidden", self.hidden)?;
        }
        Ok(())
    }
}

impl ActionGraph {
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::from_graph(self)
    }
}
