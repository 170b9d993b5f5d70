use super::line_index::LineIndex;
use super::{NodeId, SyntaxKind, SyntaxNode, SyntaxTree, TextRange};

/// Builds a [`SyntaxTree`] from nested `open`/`close` calls.
///
/// The root is a [`SyntaxKind::SourceFile`] covering the whole source.
/// Closing an `Other` node whose only child has the same range removes the
/// node and attaches the child to its parent, so pass-through wrappers never
/// sit between a node and its syntactic parent.
///
/// # Example
///
/// ```
/// use ngv_analysis::syntax::{SyntaxKind, SyntaxTreeBuilder};
///
/// let mut builder = SyntaxTreeBuilder::new("a.ts", "new Add()");
/// builder.open(SyntaxKind::NewExpression, 0, 9);
/// let ident = builder.leaf(SyntaxKind::Identifier, 4, 7);
/// builder.close();
/// let tree = builder.finish();
///
/// assert_eq!(tree.text(ident), "Add");
/// assert_eq!(tree.parent(ident).map(|p| tree.kind(p)), Some(SyntaxKind::NewExpression));
/// ```
pub struct SyntaxTreeBuilder {
    file_path: String,
    source: String,
    line_index: LineIndex,
    nodes: Vec<SyntaxNode>,
    stack: Vec<NodeId>,
}

impl SyntaxTreeBuilder {
    pub fn new(file_path: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let root = SyntaxNode {
            kind: SyntaxKind::SourceFile,
            parent: None,
            children: Vec::new(),
            range: TextRange::new(0, source.len() as u32),
            line: 1,
            type_hint: None,
        };
        Self {
            file_path: file_path.into(),
            line_index: LineIndex::new(&source),
            source,
            nodes: vec![root],
            stack: vec![NodeId::new(0)],
        }
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::new(0))
    }

    /// Start a node as the last child of the innermost open node.
    pub fn open(&mut self, kind: SyntaxKind, start: u32, end: u32) -> NodeId {
        let parent = self.current();
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            range: TextRange::new(start, end),
            line: self.line_index.line_of(start),
            type_hint: None,
        });
        self.nodes[parent.index()].children.push(id);
        self.stack.push(id);
        id
    }

    /// Finish the innermost open node. The root is never closed.
    pub fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(id) = self.stack.pop() {
            self.collapse_wrapper(id);
        }
    }

    /// A node without children.
    pub fn leaf(&mut self, kind: SyntaxKind, start: u32, end: u32) -> NodeId {
        let id = self.open(kind, start, end);
        self.close();
        id
    }

    pub fn set_type_hint(&mut self, id: NodeId, hint: impl Into<String>) {
        self.nodes[id.index()].type_hint = Some(hint.into());
    }

    fn collapse_wrapper(&mut self, id: NodeId) {
        let node = &self.nodes[id.index()];
        let (Some(parent), [child]) = (node.parent, node.children.as_slice()) else {
            return;
        };
        let child = *child;
        if node.kind != SyntaxKind::Other || self.nodes[child.index()].range != node.range {
            return;
        }

        for slot in self.nodes[parent.index()].children.iter_mut() {
            if *slot == id {
                *slot = child;
            }
        }
        self.nodes[child.index()].parent = Some(parent);
        let detached = &mut self.nodes[id.index()];
        detached.parent = None;
        detached.children.clear();
    }

    pub fn finish(mut self) -> SyntaxTree {
        while self.stack.len() > 1 {
            self.close();
        }
        SyntaxTree {
            file_path: self.file_path,
            source: self.source,
            nodes: self.nodes,
        }
    }
}
