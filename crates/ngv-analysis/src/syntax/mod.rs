//! Arena syntax tree consumed by discovery and classification.
//!
//! Nodes are addressed by [`NodeId`]; parent and child links are indices
//! into the arena, so the tree has no ownership cycles. Only the node kinds
//! the analysis distinguishes are named, everything else is
//! [`SyntaxKind::Other`].

mod builder;
mod line_index;
mod query;

pub use builder::SyntaxTreeBuilder;

use std::fmt;

/// Index of a node in its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    ClassDeclaration,
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    Accessor,
    Identifier,
    PropertyAccessExpression,
    NewExpression,
    SwitchStatement,
    Decorator,
    TypeReference,
    EnumDeclaration,
    Other,
}

/// Byte range of a node in its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: u32,
    pub end: u32,
}

impl TextRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub range: TextRange,
    /// 1-based line of `range.start`.
    pub line: u32,
    /// Declared type as written, for declarations that carry one.
    pub type_hint: Option<String>,
}

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    file_path: String,
    source: String,
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn line(&self, id: NodeId) -> u32 {
        self.node(id).line
    }

    /// `(file, line)` of a node.
    pub fn position(&self, id: NodeId) -> (&str, u32) {
        (&self.file_path, self.line(id))
    }

    pub fn type_hint(&self, id: NodeId) -> Option<&str> {
        self.node(id).type_hint.as_deref()
    }

    /// Source text covered by a node.
    pub fn text(&self, id: NodeId) -> &str {
        let range = self.node(id).range;
        self.source
            .get(range.start as usize..range.end as usize)
            .unwrap_or_default()
    }

    /// Arena size, including nodes collapsed away during building.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
