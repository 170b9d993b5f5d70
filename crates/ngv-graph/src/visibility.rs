//! Node visibility: the action selection tree and applying a selection.

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::action_graph::ActionGraph;
use crate::graph::{LinkEnd, NodeKind};

impl ActionGraph {
    /// Apply a selection of action/reducer node ids.
    ///
    /// Selectable nodes (actions and reducers) take their value from
    /// `visibility`; every other node starts visible. A node then stays
    /// visible only if it was explicitly selected or is an endpoint of a link
    /// whose two endpoints are visible.
    pub fn apply_visibility<S: BuildHasher>(&mut self, visibility: &HashMap<String, bool, S>) {
        let mut hidden: FxHashMap<String, bool> = FxHashMap::default();

        for node in self.nodes_mut() {
            let selected = visibility.get(&node.id).copied();
            if node.is_selectable() {
                node.hidden = selected == Some(false);
                hidden.insert(node.id.clone(), selected != Some(true));
            } else {
                node.hidden = false;
                hidden.insert(node.id.clone(), true);
            }
        }

        let first_pass: FxHashMap<&str, bool> = self
            .nodes()
            .map(|node| (node.id.as_str(), node.hidden))
            .collect();
        let end_visible = |end: &LinkEnd| first_pass.get(end.id()) == Some(&false);
        let shown: Vec<String> = self
            .links()
            .iter()
            .filter(|link| end_visible(&link.source) && end_visible(&link.target))
            .flat_map(|link| [link.source.id().to_string(), link.target.id().to_string()])
            .collect();
        for id in shown {
            hidden.insert(id, false);
        }

        for node in self.nodes_mut() {
            if let Some(&value) = hidden.get(&node.id) {
                node.hidden = value;
            }
        }
    }

    /// Show every node again.
    pub fn show_all(&mut self) {
        for node in self.nodes_mut() {
            node.hidden = false;
        }
    }
}

/// Action nodes grouped by the `/`-separated segments of their file path.
///
/// The entry for a file holds the ids of the actions declared in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTree {
    children: IndexMap<String, ActionTree>,
    actions: Vec<String>,
}

impl ActionTree {
    pub fn from_graph(graph: &ActionGraph) -> Self {
        let mut tree = Self::default();
        for node in graph.nodes().filter(|node| node.kind == NodeKind::Action) {
            let mut current = &mut tree;
            for segment in node.file_path.split('/') {
                current = current.children.entry(segment.to_string()).or_default();
            }
            current.actions.push(node.id.clone());
        }
        tree
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &ActionTree)> {
        self.children.iter().map(|(key, tree)| (key.as_str(), tree))
    }

    /// Ids of the actions declared directly at this entry.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.actions.is_empty()
    }

    /// Every action id in the tree, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<String>) {
        ids.extend(self.actions.iter().cloned());
        for child in self.children.values() {
            child.collect_ids(ids);
        }
    }

    /// Action ids below `path`, or `None` when the path is not in the tree.
    ///
    /// The last segment may be an action id. A trailing `/` is ignored.
    pub fn ids_under(&self, path: &str) -> Option<Vec<String>> {
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut current = self;
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            if let Some(child) = current.children.get(segment) {
                current = child;
                continue;
            }
            let is_last = segments.peek().is_none();
            return current
                .actions
                .iter()
                .find(|id| is_last && id.as_str() == segment)
                .map(|id| vec![id.clone()]);
        }
        Some(current.ids())
    }

    /// A visibility selection showing only the actions below `path`.
    pub fn selection_for(&self, path: &str) -> Option<HashMap<String, bool>> {
        let shown = self.ids_under(path)?;
        let mut selection: HashMap<String, bool> =
            self.ids().into_iter().map(|id| (id, false)).collect();
        for id in shown {
            selection.insert(id, true);
        }
        Some(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Link, Node};

    fn graph() -> ActionGraph {
        ActionGraph::from_data(
            vec![
                Node::new("a1", "Add", NodeKind::Action, "app/todo/actions.ts", 1),
                Node::new("a2", "Remove", NodeKind::Action, "app/todo/actions.ts", 5),
                Node::new("a3", "Load", NodeKind::Action, "app/user/actions.ts", 1),
                Node::new("m1", "dispatch", NodeKind::Method, "app/todo/page.ts", 9),
                Node::new("m2", "load", NodeKind::Method, "app/user/page.ts", 3),
            ],
            vec![Link::between("a1", "m1"), Link::between("a3", "m2")],
        )
    }

    #[test]
    fn tree_groups_actions_by_path() {
        let tree = ActionTree::from_graph(&graph());
        assert_eq!(tree.ids(), vec!["a1", "a2", "a3"]);
        assert_eq!(tree.children().count(), 1);
        assert_eq!(
            tree.ids_under("app/todo/").unwrap(),
            vec!["a1".to_string(), "a2".to_string()]
        );
        assert_eq!(tree.ids_under("app/todo/actions.ts/a2").unwrap(), vec!["a2"]);
        assert!(tree.ids_under("app/nope").is_none());
    }

    #[test]
    fn selection_hides_unselected_actions_and_their_neighbours() {
        let mut graph = graph();
        let selection = ActionTree::from_graph(&graph).selection_for("app/user").unwrap();
        graph.apply_visibility(&selection);

        let visible: Vec<&str> = graph.visible_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(visible, vec!["a3", "m2"]);
        assert_eq!(graph.visible_links().len(), 1);

        let snapshot = graph.visible_graph();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.links, vec![Link::between("a3", "m2")]);
        assert!(snapshot.nodes.iter().all(|n| !n.hidden));
    }

    #[test]
    fn unselected_nodes_without_visible_links_are_hidden() {
        let mut graph = graph();
        graph.apply_visibility(&HashMap::new());

        // Absent actions still count as visible while links are inspected.
        let visible: Vec<&str> = graph.visible_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(visible, vec!["a1", "a3", "m1", "m2"]);

        graph.show_all();
        assert_eq!(graph.visible_nodes().len(), 5);
    }
}
