//! Smoke tests for ngv-graph.
//!
//! Fast, deterministic checks of the graph builder and the projections.
//!
//! For randomized invariant checks, see property_tests.rs (requires proptest feature).

use serde_json::json;

use crate::{
    ActionExport, ActionGraph, DisplayMode, GraphError, GraphViews, Link, LinkEnd, LinkStatus,
    Node, NodeKind, ReferenceExport, Usage, decode, decode_json,
};

fn sample_graph_json() -> String {
    json!({
        "links": [
            { "filePath": "path/1", "line": 1, "source": "id/1", "status": "DISABLED", "target": "id/3" },
            { "filePath": "path/1", "line": 1, "source": "id/2", "status": "DISABLED", "target": "id/3" },
            { "filePath": "path/1", "line": 1, "source": "id/4", "status": "DISABLED", "target": "id/1" }
        ],
        "nodes": [
            { "filePath": "path/1", "id": "id/1", "line": 1, "name": "name/1", "type": "ACTION" },
            { "filePath": "path/2", "id": "id/2", "line": 2, "name": "name/2", "type": "ACTION" },
            { "filePath": "path/2", "id": "id/5", "line": 2, "name": "name/5", "type": "ACTION" },
            { "filePath": "path/3", "id": "id/3", "line": 3, "name": "name/3", "type": "REDUCER" },
            { "filePath": "path/1", "id": "id/4", "line": 1, "name": "name/1", "type": "EFFECT" }
        ]
    })
    .to_string()
}

fn sample() -> ActionGraph {
    ActionGraph::from_json(&sample_graph_json()).expect("sample graph parses")
}

fn add_action(references: Vec<ReferenceExport>) -> ActionExport {
    ActionExport {
        name: "Add".to_string(),
        file_path: "p/1".to_string(),
        line: 1,
        references,
    }
}

fn reference(file_path: &str, usages: Vec<Usage>) -> ReferenceExport {
    ReferenceExport {
        file_path: file_path.to_string(),
        line: 2,
        usages,
    }
}

#[test]
fn test_parse_from_json() {
    let graph = sample();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.links().len(), 3);
}

#[test]
fn test_parse_from_graph_and_data() {
    let plain = sample().to_graph();
    let from_graph = ActionGraph::from_graph(plain.clone());
    assert_eq!(from_graph.node_count(), 5);
    assert_eq!(from_graph.links().len(), 3);

    let from_data = ActionGraph::from_data(plain.nodes, plain.links);
    assert_eq!(from_data.node_count(), 5);
    assert_eq!(from_data.links().len(), 3);

    assert_eq!(ActionGraph::empty().node_count(), 0);
}

#[test]
fn test_missing_nodes_or_links_fails_fast() {
    let err = ActionGraph::from_json(r#"{ "links": [] }"#).unwrap_err();
    assert!(matches!(err, GraphError::MissingField("nodes")));
    assert_eq!(err.to_string(), "Missing nodes");

    let err = ActionGraph::from_json(r#"{ "nodes": [], "links": null }"#).unwrap_err();
    assert!(matches!(err, GraphError::MissingField("links")));
}

#[test]
fn test_unknown_node_kind_is_a_decode_error() {
    let json = r#"{ "nodes": [{ "id": "x", "name": "x", "kind": "STORE", "filePath": "f", "line": 1 }], "links": [] }"#;
    assert!(matches!(
        ActionGraph::from_json(json),
        Err(GraphError::Json(_))
    ));
}

#[test]
fn test_clone_is_independent() {
    let mut original = sample();
    let cloned = original.clone();

    original.retain_nodes(|node| node.id != "id/4");
    if let Some(node) = original.nodes_mut().last() {
        node.id = "a".to_string();
    }
    original.links_mut().pop();
    if let Some(link) = original.links_mut().last_mut() {
        link.source = LinkEnd::from("e");
    }

    assert_eq!(original.node_count(), 4);
    assert_eq!(original.links().len(), 2);
    assert_eq!(cloned.node_count(), 5);
    assert_eq!(cloned.links().len(), 3);
    assert_eq!(cloned.nodes().last().map(|n| n.id.as_str()), Some("id/4"));
    assert_eq!(cloned.links()[1].source.id(), "id/2");
    assert_eq!(cloned.links()[2].source.id(), "id/4");
}

#[test]
fn test_without_reducers() {
    let graph = sample().without_reducers();
    assert!(graph.nodes().all(|node| node.kind != NodeKind::Reducer));
    assert_eq!(graph.node_count(), 4);
    // Both links into the reducer are gone.
    assert_eq!(graph.links().len(), 1);
    assert_eq!(graph.links()[0].source.id(), "id/4");
}

#[test]
fn test_split_reducers() {
    let original = sample();
    let split = original.with_split_reducers();

    assert!(split.get_node_by_id("id/3").is_some(), "index is construction-time");
    assert!(split.nodes().all(|node| node.id != "id/3"));

    let retyped: Vec<&Node> = split
        .nodes()
        .filter(|node| node.kind == NodeKind::Reducer)
        .collect();
    assert_eq!(retyped.len(), 2);
    for node in retyped {
        assert_eq!(
            original.get_node_by_id(&node.id).map(|n| n.kind),
            Some(NodeKind::Action)
        );
        assert_eq!(node.reducer.as_deref(), Some("id/3"));
        assert!(original.links().iter().any(|link| {
            link.source.id() == node.id
                && original.get_node_by_id(link.target.id()).map(|n| n.kind)
                    == Some(NodeKind::Reducer)
        }));
    }

    // id/5 had no reducer link and stays an action.
    assert_eq!(
        split.get_node_by_id("id/5").map(|n| n.kind),
        Some(NodeKind::Action)
    );
    assert_eq!(split.links().len(), 1);
    // The source graph is untouched.
    assert_eq!(
        original.get_node_by_id("id/1").map(|n| n.kind),
        Some(NodeKind::Action)
    );
}

#[test]
fn test_get_node_by_id() {
    let graph = sample();
    let first = graph.nodes().next().map(|n| n as *const Node);
    let found = graph.get_node_by_id("id/1").map(|n| n as *const Node);
    assert_eq!(first, found);
    assert!(graph.get_node_by_id("missing").is_none());
}

#[test]
fn test_visible_nodes() {
    let mut graph = sample();
    if let Some(node) = graph.nodes_mut().next() {
        node.hidden = true;
    }
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.visible_nodes().len(), 4);
}

#[test]
fn test_visible_links_with_ids_and_bound_nodes() {
    let mut graph = sample();
    if let Some(node) = graph.get_node_by_id_mut("id/2") {
        node.hidden = true;
    }
    assert_eq!(graph.visible_links().len(), 2);

    // A bound endpoint answers with its own flag, even if stale.
    let mut bound = graph.get_node_by_id("id/4").cloned().expect("id/4 exists");
    bound.hidden = true;
    graph.links_mut()[2].source = LinkEnd::Node(bound);
    assert_eq!(graph.visible_links().len(), 1);

    // Unknown ids count as visible.
    graph.links_mut().push(Link::between("ghost", "id/1"));
    assert_eq!(graph.visible_links().len(), 2);
}

#[test]
fn test_method_reference_yields_two_nodes_and_one_link() {
    let graph = decode(
        vec![add_action(vec![reference(
            "p/2",
            vec![Usage::Method {
                name: "dispatch".to_string(),
            }],
        )])],
        1,
    );

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["Action::p/1::Add", "Method::p/2::dispatch"]);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].source.id(), "Action::p/1::Add");
    assert_eq!(graph.links[0].target.id(), "Method::p/2::dispatch");
    assert_eq!(graph.links[0].status, LinkStatus::Disabled);
}

#[test]
fn test_bare_instantiation_yields_only_the_action() {
    let graph = decode(
        vec![add_action(vec![reference("p/2", vec![Usage::Instantiate])])],
        1,
    );
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].id, "Action::p/1::Add");
    assert!(graph.links.is_empty());
}

#[test]
fn test_instantiation_with_method_is_kept() {
    let graph = decode(
        vec![add_action(vec![reference(
            "p/2",
            vec![
                Usage::Instantiate,
                Usage::Method {
                    name: "create".to_string(),
                },
            ],
        )])],
        1,
    );
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links[0].source.id(), "Method::p/2::create");
}

#[test]
fn test_reducer_node_uses_trailing_path_segments() {
    let graph = decode(
        vec![add_action(vec![reference(
            "a/b/c/reducer.ts",
            vec![Usage::Reducer],
        )])],
        2,
    );
    let node = &graph.nodes[1];
    assert_eq!(node.id, "Reducer::a/b/c/reducer.ts");
    assert_eq!(node.name, "c/reducer.ts");
    assert_eq!(node.kind, NodeKind::Reducer);
}

#[test]
fn test_decode_json_surfaces_unknown_usage_type() {
    let json = r#"[{ "name": "Add", "filePath": "p/1", "line": 1,
        "references": [{ "filePath": "p/2", "line": 2, "usages": [{ "type": "SELECTOR" }] }] }]"#;
    assert!(matches!(decode_json(json, 1), Err(GraphError::Json(_))));
}

#[test]
fn test_graph_views_select_projection() {
    let views = GraphViews::from_graph(sample().to_graph());
    assert_eq!(views.get(DisplayMode::Reducers).node_count(), 5);
    assert_eq!(views.get(DisplayMode::SplitReducers).node_count(), 4);
    assert_eq!(
        views
            .get(DisplayMode::NoReducers)
            .nodes()
            .filter(|n| n.kind == NodeKind::Reducer)
            .count(),
        0
    );
}

#[test]
fn test_statistics_count_kinds() {
    let stats = sample().statistics();
    assert_eq!(stats.node_count, 5);
    assert_eq!(stats.actions, 3);
    assert_eq!(stats.reducers, 1);
    assert_eq!(stats.effects, 1);
    assert_eq!(stats.link_count, 3);
    assert!(stats.to_string().starts_with("5 nodes (3 actions"));
}
