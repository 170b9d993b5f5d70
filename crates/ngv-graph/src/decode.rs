//! Graph builder: exported analysis in, deduplicated node/link graph out.

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::export::{ActionExport, ReferenceExport};
use crate::graph::{Graph, Link, Node, NodeKind};
use crate::usage::{USAGE_PRIORITY, Usage, UsageKind};

/// Node id of an action: `Action::<filePath>::<name>`.
pub fn action_id(action: &ActionExport) -> String {
    format!("{}::{}::{}", NodeKind::Action, action.file_path, action.name)
}

/// The usage that decides a reference's identity.
///
/// Kinds are tried in [`USAGE_PRIORITY`] order. When a kind occurs more than
/// once the last occurrence is used.
pub fn dominant_usage(usages: &[Usage]) -> Option<&Usage> {
    USAGE_PRIORITY
        .iter()
        .find_map(|kind| usages.iter().rev().find(|usage| usage.kind() == *kind))
}

/// Node id of a reference: `<Kind>::<filePath>[::<name>]` of its dominant usage.
pub fn reference_id(reference: &ReferenceExport) -> String {
    let dominant = dominant_usage(&reference.usages);
    let kind = dominant.map_or(UsageKind::Unknown, Usage::kind);
    match dominant.and_then(Usage::name) {
        Some(name) => format!("{}::{}::{}", kind, reference.file_path, name),
        None => format!("{}::{}", kind, reference.file_path),
    }
}

/// The last `depth` `/`-separated segments of `file_path`.
pub fn reducer_display_name(file_path: &str, depth: usize) -> String {
    let segments: Vec<&str> = file_path.split('/').collect();
    let keep = depth.min(segments.len());
    segments[segments.len() - keep..].join("/")
}

fn node_kind(kind: UsageKind) -> NodeKind {
    match kind {
        UsageKind::Effect => NodeKind::Effect,
        UsageKind::Method | UsageKind::Constructor => NodeKind::Method,
        UsageKind::Reducer => NodeKind::Reducer,
        UsageKind::Unknown | UsageKind::Instantiate => NodeKind::Unknown,
    }
}

fn reference_node(reference: &ReferenceExport, reducer_depth: usize) -> Node {
    let dominant = dominant_usage(&reference.usages);
    let kind = dominant.map_or(UsageKind::Unknown, Usage::kind);

    let name = if kind == UsageKind::Reducer {
        reducer_display_name(&reference.file_path, reducer_depth)
    } else {
        dominant
            .and_then(Usage::name)
            .map_or_else(|| kind.to_string(), str::to_string)
    };

    Node::new(
        reference_id(reference),
        name,
        node_kind(kind),
        &reference.file_path,
        reference.line,
    )
}

/// Decode an exported analysis (a JSON array of actions) into a graph.
///
/// `reducer_depth` is the number of trailing path segments used as the
/// display name of reducer nodes.
///
/// # Errors
///
/// Returns [`GraphError::Json`](crate::GraphError::Json) for malformed input,
/// including usage kinds this crate does not know.
pub fn decode_json(json: &str, reducer_depth: usize) -> Result<Graph> {
    let actions: Vec<ActionExport> = serde_json::from_str(json)?;
    Ok(decode(actions, reducer_depth))
}

/// Build the graph for already-parsed actions.
///
/// References that are empty or a lone `Instantiate` are dropped first.
/// Node ids are unique (first occurrence wins) and links are unique by value.
pub fn decode(mut actions: Vec<ActionExport>, reducer_depth: usize) -> Graph {
    for action in &mut actions {
        action.references.retain(|reference| !reference.is_noise());
    }

    let mut graph = Graph::default();
    let mut used_nodes = FxHashSet::default();

    for action in &actions {
        let id = action_id(action);
        if used_nodes.insert(id.clone()) {
            graph.nodes.push(Node::new(
                id,
                &action.name,
                NodeKind::Action,
                &action.file_path,
                action.line,
            ));
        }

        for reference in &action.references {
            let node = reference_node(reference, reducer_depth);
            if used_nodes.insert(node.id.clone()) {
                graph.nodes.push(node);
            }
        }
    }

    let mut used_links = FxHashSet::default();
    for action in &actions {
        let action_end = action_id(action);
        for reference in &action.references {
            let reference_end = reference_id(reference);
            let (source, target) = if reference.has_usage(UsageKind::Instantiate) {
                (reference_end, action_end.clone())
            } else {
                (action_end.clone(), reference_end)
            };
            let link = Link::between(source, target).at(&reference.file_path, reference.line);

            if used_links.insert(link.clone()) {
                graph.links.push(link);
            }
        }
    }

    graph
}
