//! Read-only navigation primitives.

use super::{NodeId, SyntaxKind, SyntaxTree};

impl SyntaxTree {
    pub fn first_child_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    pub fn children_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&child| self.kind(child) == kind)
            .collect()
    }

    /// All descendants of `kind` in pre-order, `node` itself excluded.
    pub fn descendants_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut pending: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = pending.pop() {
            if self.kind(current) == kind {
                found.push(current);
            }
            pending.extend(self.children(current).iter().rev());
        }
        found
    }

    /// First descendant of `kind` in pre-order, `node` itself excluded.
    pub fn first_descendant_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        let mut pending: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = pending.pop() {
            if self.kind(current) == kind {
                return Some(current);
            }
            pending.extend(self.children(current).iter().rev());
        }
        None
    }

    /// Proper ancestors, innermost first.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), move |&current| self.parent(current))
    }

    pub fn nearest_ancestor_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.ancestors(node).find(|&ancestor| self.kind(ancestor) == kind)
    }

    /// Walk up while `predicate` holds and return the last ancestor it held for.
    ///
    /// `None` when the immediate parent already fails (or there is none).
    pub fn highest_ancestor_while(
        &self,
        node: NodeId,
        mut predicate: impl FnMut(NodeId) -> bool,
    ) -> Option<NodeId> {
        self.ancestors(node)
            .take_while(|&ancestor| predicate(ancestor))
            .last()
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax::{SyntaxKind, SyntaxTree, SyntaxTreeBuilder};

    use super::*;

    /// `class A { m() { new a.b.C(); } }` shaped by hand.
    fn sample() -> (SyntaxTree, [NodeId; 6]) {
        let source = "class A { m() { new a.b.C(); } }";
        let mut b = SyntaxTreeBuilder::new("a.ts", source);
        let class = b.open(SyntaxKind::ClassDeclaration, 0, 32);
        let class_name = b.leaf(SyntaxKind::Identifier, 6, 7);
        let method = b.open(SyntaxKind::MethodDeclaration, 10, 30);
        b.leaf(SyntaxKind::Identifier, 10, 11);
        let new_expr = b.open(SyntaxKind::NewExpression, 16, 27);
        let outer = b.open(SyntaxKind::PropertyAccessExpression, 20, 25);
        b.open(SyntaxKind::PropertyAccessExpression, 20, 23);
        b.leaf(SyntaxKind::Identifier, 20, 21);
        b.leaf(SyntaxKind::Identifier, 22, 23);
        b.close();
        let c = b.leaf(SyntaxKind::Identifier, 24, 25);
        let tree = b.finish();
        (tree, [class, class_name, method, new_expr, outer, c])
    }

    #[test]
    fn child_queries_only_look_one_level_down() {
        let (tree, [class, class_name, method, ..]) = sample();
        assert_eq!(tree.first_child_of_kind(class, SyntaxKind::Identifier), Some(class_name));
        assert_eq!(tree.children_of_kind(class, SyntaxKind::Identifier), vec![class_name]);
        assert_eq!(tree.first_child_of_kind(class, SyntaxKind::MethodDeclaration), Some(method));
        assert_eq!(tree.first_child_of_kind(class, SyntaxKind::NewExpression), None);
    }

    #[test]
    fn descendants_are_pre_order() {
        let (tree, [class, class_name, .., c]) = sample();
        let idents = tree.descendants_of_kind(class, SyntaxKind::Identifier);
        let texts: Vec<&str> = idents.iter().map(|&id| tree.text(id)).collect();
        assert_eq!(texts, vec!["A", "m", "a", "b", "C"]);
        assert_eq!(idents.first(), Some(&class_name));
        assert_eq!(idents.last(), Some(&c));
        assert_eq!(
            tree.first_descendant_of_kind(tree.root(), SyntaxKind::Identifier),
            Some(class_name)
        );
        assert!(tree.descendants_of_kind(c, SyntaxKind::Identifier).is_empty());
    }

    #[test]
    fn ancestor_queries() {
        let (tree, [class, _, method, new_expr, outer, c]) = sample();
        assert_eq!(tree.nearest_ancestor_of_kind(c, SyntaxKind::MethodDeclaration), Some(method));
        assert_eq!(tree.nearest_ancestor_of_kind(c, SyntaxKind::ClassDeclaration), Some(class));
        assert_eq!(tree.nearest_ancestor_of_kind(c, SyntaxKind::SwitchStatement), None);

        let highest = tree.highest_ancestor_while(c, |a| {
            tree.kind(a) == SyntaxKind::PropertyAccessExpression
        });
        assert_eq!(highest, Some(outer));
        assert_eq!(tree.parent(outer), Some(new_expr));

        // Immediate parent fails the predicate.
        assert_eq!(
            tree.highest_ancestor_while(outer, |a| tree.kind(a) == SyntaxKind::Identifier),
            None
        );
    }
}
