//! Structural matchers deciding how a reference is used.

use ngv_graph::Usage;

use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Name given when a derived name cannot be found.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Source prefix of an NgRx effect decorator.
const EFFECT_DECORATOR_PREFIX: &str = "@Effect(";

/// One structural rule. Every matcher is evaluated, in [`Matcher::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// Always matches, so every reference has at least one usage.
    Unknown,
    /// The outermost property access around the node is the callee of `new`.
    Instantiate,
    /// Inside a member decorated with `@Effect(...)`.
    Effect,
    Method,
    /// Inside a `switch` that dispatches on something named like `type`.
    Reducer,
    Constructor,
}

impl Matcher {
    pub const ALL: [Matcher; 6] = [
        Matcher::Unknown,
        Matcher::Instantiate,
        Matcher::Effect,
        Matcher::Method,
        Matcher::Reducer,
        Matcher::Constructor,
    ];

    /// The usage this matcher contributes for `node`, if it matches.
    pub fn apply(self, tree: &SyntaxTree, node: NodeId) -> Option<Usage> {
        match self {
            Matcher::Unknown => Some(Usage::Unknown),
            Matcher::Instantiate => is_instantiation(tree, node).then_some(Usage::Instantiate),
            Matcher::Effect => effect_name(tree, node).map(|name| Usage::Effect { name }),
            Matcher::Method => tree
                .nearest_ancestor_of_kind(node, SyntaxKind::MethodDeclaration)
                .map(|method| Usage::Method {
                    name: first_identifier_text(tree, method),
                }),
            Matcher::Reducer => is_within_reducer(tree, node).then_some(Usage::Reducer),
            Matcher::Constructor => tree
                .nearest_ancestor_of_kind(node, SyntaxKind::Constructor)
                .map(|_| Usage::Constructor {
                    name: tree
                        .nearest_ancestor_of_kind(node, SyntaxKind::ClassDeclaration)
                        .map_or_else(|| UNKNOWN_NAME.to_string(), |class| {
                            first_identifier_text(tree, class)
                        }),
                }),
        }
    }
}

/// All usages of the reference at `node`, in matcher order.
pub fn classify(tree: &SyntaxTree, node: NodeId) -> Vec<Usage> {
    Matcher::ALL
        .iter()
        .filter_map(|matcher| matcher.apply(tree, node))
        .collect()
}

fn first_identifier_text(tree: &SyntaxTree, node: NodeId) -> String {
    tree.first_child_of_kind(node, SyntaxKind::Identifier)
        .map_or_else(|| UNKNOWN_NAME.to_string(), |id| tree.text(id).to_string())
}

/// `a.b.c` for a node at `c`; the node itself outside property accesses.
fn outermost_property_access(tree: &SyntaxTree, node: NodeId) -> NodeId {
    tree.highest_ancestor_while(node, |ancestor| {
        tree.kind(ancestor) == SyntaxKind::PropertyAccessExpression
    })
    .unwrap_or(node)
}

fn is_instantiation(tree: &SyntaxTree, node: NodeId) -> bool {
    let outermost = outermost_property_access(tree, node);
    tree.parent(outermost)
        .is_some_and(|parent| tree.kind(parent) == SyntaxKind::NewExpression)
}

fn effect_name(tree: &SyntaxTree, node: NodeId) -> Option<String> {
    let below_decorated = tree.highest_ancestor_while(node, |ancestor| {
        tree.first_descendant_of_kind(ancestor, SyntaxKind::Decorator)
            .is_none()
    })?;
    let decorated = tree.parent(below_decorated)?;
    let decorator = tree.first_descendant_of_kind(decorated, SyntaxKind::Decorator)?;
    if !tree.text(decorator).starts_with(EFFECT_DECORATOR_PREFIX) {
        return None;
    }

    let name = tree
        .parent(decorator)
        .map_or_else(|| UNKNOWN_NAME.to_string(), |member| {
            first_identifier_text(tree, member)
        });
    Some(name)
}

fn is_within_reducer(tree: &SyntaxTree, node: NodeId) -> bool {
    let outermost = outermost_property_access(tree, node);
    let Some(switch_child) = tree.highest_ancestor_while(outermost, |ancestor| {
        tree.kind(ancestor) != SyntaxKind::SwitchStatement
    }) else {
        return false;
    };
    let Some(switch) = tree.parent(switch_child) else {
        return false;
    };

    let mentions_type = |id: NodeId| tree.text(id).contains("type");

    let direct = tree
        .children_of_kind(switch, SyntaxKind::Identifier)
        .into_iter()
        .any(mentions_type);
    let through_access = tree
        .children_of_kind(switch, SyntaxKind::PropertyAccessExpression)
        .into_iter()
        .any(|access| {
            tree.descendants_of_kind(access, SyntaxKind::Identifier)
                .into_iter()
                .any(mentions_type)
        });

    direct || through_access
}
