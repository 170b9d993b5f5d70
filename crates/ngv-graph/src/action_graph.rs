//! Graph wrapper with the projections and lookups a viewer needs.

use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Link, LinkEnd, Node, NodeKind};

/// A node/link graph with an id index and reducer projections.
///
/// Nodes live in an arena. Structural edits only mark arena slots as removed,
/// and the id index is built once, when the graph is constructed or cloned.
/// Consequently [`get_node_by_id`](Self::get_node_by_id) keeps resolving
/// nodes that a later edit removed, and the node it returns for a duplicated
/// id is the last one seen at construction.
#[derive(Debug)]
pub struct ActionGraph {
    arena: Vec<Node>,
    live: Vec<bool>,
    links: Vec<Link>,
    index: FxHashMap<String, usize>,
}

impl ActionGraph {
    /// Parse a serialized graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingField`] when `nodes` or `links` is absent or
    /// `null`, [`GraphError::Json`] for any other malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut parsed: Value = serde_json::from_str(json)?;
        let nodes = take_field(&mut parsed, "nodes")?;
        let links = take_field(&mut parsed, "links")?;
        Ok(Self::from_data(
            serde_json::from_value(nodes)?,
            serde_json::from_value(links)?,
        ))
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self::from_data(graph.nodes, graph.links)
    }

    pub fn from_data(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id.clone(), slot))
            .collect();
        Self {
            live: vec![true; nodes.len()],
            arena: nodes,
            links,
            index,
        }
    }

    pub fn empty() -> Self {
        Self::from_data(Vec::new(), Vec::new())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.arena
            .iter()
            .zip(&self.live)
            .filter_map(|(node, live)| live.then_some(node))
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.arena
            .iter_mut()
            .zip(&self.live)
            .filter_map(|(node, live)| live.then_some(node))
    }

    pub fn node_count(&self) -> usize {
        self.live.iter().filter(|live| **live).count()
    }

    /// Remove every node for which `keep` returns false.
    ///
    /// Links are left alone; the projections prune them afterwards.
    pub fn retain_nodes(&mut self, mut keep: impl FnMut(&Node) -> bool) {
        for (node, live) in self.arena.iter().zip(self.live.iter_mut()) {
            if *live && !keep(node) {
                *live = false;
            }
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Vec<Link> {
        &mut self.links
    }

    /// Lookup through the construction-time index.
    pub fn get_node_by_id(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&slot| &self.arena[slot])
    }

    pub fn get_node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        let slot = *self.index.get(id)?;
        Some(&mut self.arena[slot])
    }

    /// Copy with every `Reducer` node removed.
    pub fn without_reducers(&self) -> Self {
        let mut projected = self.clone();
        projected.retain_nodes(|node| node.kind != NodeKind::Reducer);
        projected.prune_links();
        projected
    }

    /// Copy where reducers become labels on the actions that feed them.
    ///
    /// Reducer nodes are removed. An action with a link into a removed
    /// reducer is retyped to `Reducer` and remembers that reducer's id
    /// (the first such link decides).
    pub fn with_split_reducers(&self) -> Self {
        let mut projected = self.clone();
        let reducers: FxHashSet<String> = projected
            .nodes()
            .filter(|node| node.kind == NodeKind::Reducer)
            .map(|node| node.id.clone())
            .collect();

        projected.retain_nodes(|node| node.kind != NodeKind::Reducer);

        let ActionGraph {
            arena, live, links, ..
        } = &mut projected;
        for (node, _) in arena.iter_mut().zip(live.iter()).filter(|(_, live)| **live) {
            if node.kind != NodeKind::Action {
                continue;
            }
            let fed_reducer = links
                .iter()
                .find(|link| link.source.id() == node.id && reducers.contains(link.target.id()));
            if let Some(link) = fed_reducer {
                node.kind = NodeKind::Reducer;
                node.reducer = Some(link.target.id().to_string());
            }
        }

        projected.prune_links();
        projected
    }

    pub fn visible_nodes(&self) -> Vec<&Node> {
        self.nodes().filter(|node| !node.hidden).collect()
    }

    /// Links whose endpoints are both visible.
    ///
    /// A bound endpoint answers with its own `hidden` flag. An id endpoint is
    /// looked up through the index and counts as visible when unknown.
    pub fn visible_links(&self) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|link| !self.end_hidden(&link.source) && !self.end_hidden(&link.target))
            .collect()
    }

    fn end_hidden(&self, end: &LinkEnd) -> bool {
        match end {
            LinkEnd::Node(node) => node.hidden,
            LinkEnd::Id(id) => self.get_node_by_id(id).is_some_and(|node| node.hidden),
        }
    }

    /// Drop links with an endpoint that is not a live node.
    fn prune_links(&mut self) {
        let ids: FxHashSet<&str> = self
            .arena
            .iter()
            .zip(&self.live)
            .filter(|(_, live)| **live)
            .map(|(node, _)| node.id.as_str())
            .collect();
        self.links
            .retain(|link| ids.contains(link.source.id()) && ids.contains(link.target.id()));
    }

    /// Snapshot of the live nodes and links.
    pub fn to_graph(&self) -> Graph {
        Graph {
            nodes: self.nodes().cloned().collect(),
            links: self.links.clone(),
        }
    }

    /// Snapshot of the visible nodes and links only.
    pub fn visible_graph(&self) -> Graph {
        Graph {
            nodes: self.visible_nodes().into_iter().cloned().collect(),
            links: self.visible_links().into_iter().cloned().collect(),
        }
    }
}

impl Clone for ActionGraph {
    /// Copies live nodes and links into a fresh graph with a fresh index.
    fn clone(&self) -> Self {
        Self::from_data(self.nodes().cloned().collect(), self.links.clone())
    }
}

impl Default for ActionGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Graph> for ActionGraph {
    fn from(graph: Graph) -> Self {
        Self::from_graph(graph)
    }
}

fn take_field(parsed: &mut Value, field: &'static str) -> Result<Value> {
    match parsed.get_mut(field).map(Value::take) {
        Some(Value::Null) | None => Err(GraphError::MissingField(field)),
        Some(value) => Ok(value),
    }
}
