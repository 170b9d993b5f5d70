//! Visualization-facing graph data: nodes, links and the plain [`Graph`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a node stands for in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Unknown,
    Action,
    Effect,
    Method,
    Reducer,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Unknown => "Unknown",
            NodeKind::Action => "Action",
            NodeKind::Effect => "Effect",
            NodeKind::Method => "Method",
            NodeKind::Reducer => "Reducer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub kind: NodeKind,
    pub file_path: String,
    pub line: u32,
    /// Id of the reducer node an action was folded into by the split projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reducer: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        file_path: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            file_path: file_path.into(),
            line,
            reducer: None,
            hidden: false,
        }
    }

    /// Action and reducer nodes are the ones a visibility selection controls.
    pub fn is_selectable(&self) -> bool {
        matches!(self.kind, NodeKind::Action | NodeKind::Reducer)
    }
}

/// Display state of a link; activation is driven by the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkStatus {
    #[default]
    Disabled,
    ActiveInput,
    ActiveOutput,
}

/// A link endpoint: a bare node id, or a node already bound by a layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEnd {
    Id(String),
    Node(Node),
}

impl LinkEnd {
    pub fn id(&self) -> &str {
        match self {
            LinkEnd::Id(id) => id,
            LinkEnd::Node(node) => &node.id,
        }
    }
}

impl From<&str> for LinkEnd {
    fn from(id: &str) -> Self {
        LinkEnd::Id(id.to_string())
    }
}

impl From<String> for LinkEnd {
    fn from(id: String) -> Self {
        LinkEnd::Id(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub source: LinkEnd,
    pub target: LinkEnd,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default)]
    pub status: LinkStatus,
}

impl Link {
    /// A disabled link between two node ids.
    pub fn between(source: impl Into<LinkEnd>, target: impl Into<LinkEnd>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            file_path: None,
            line: None,
            status: LinkStatus::Disabled,
        }
    }

    pub fn at(mut self, file_path: impl Into<String>, line: u32) -> Self {
        self.file_path = Some(file_path.into());
        self.line = Some(line);
        self
    }
}

/// Plain node/link lists, the shape a viewer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}
