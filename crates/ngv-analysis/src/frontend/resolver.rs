//! Declaration-based type resolution.

use rustc_hash::FxHashSet;

use super::TypeResolver;
use crate::error::ResolveError;
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Resolves types from the class and enum declarations of a set of files.
///
/// This is a structural stand-in for a type checker: it knows which names
/// are declared classes and enums, and reads declared property types from
/// the tree's type hints.
#[derive(Debug, Default, Clone)]
pub struct DeclarationResolver {
    classes: FxHashSet<String>,
    enums: FxHashSet<String>,
}

impl DeclarationResolver {
    pub fn from_trees<'t>(trees: impl IntoIterator<Item = &'t SyntaxTree>) -> Self {
        let mut resolver = Self::default();
        for tree in trees {
            resolver.add_tree(tree);
        }
        resolver
    }

    pub fn add_tree(&mut self, tree: &SyntaxTree) {
        for class in tree.descendants_of_kind(tree.root(), SyntaxKind::ClassDeclaration) {
            if let Some(name) = tree.first_child_of_kind(class, SyntaxKind::Identifier) {
                self.classes.insert(tree.text(name).to_string());
            }
        }
        for decl in tree.descendants_of_kind(tree.root(), SyntaxKind::EnumDeclaration) {
            if let Some(name) = tree.first_child_of_kind(decl, SyntaxKind::Identifier) {
                self.enums.insert(tree.text(name).to_string());
            }
        }
    }

    pub fn is_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// `Enum.Member` when `node` is the member name of an access on a known enum.
    fn enum_member(&self, tree: &SyntaxTree, node: NodeId) -> Option<String> {
        let access = tree.parent(node)?;
        if tree.kind(access) != SyntaxKind::PropertyAccessExpression {
            return None;
        }
        let (object, member) = match tree.children(access) {
            [object, member] => (*object, *member),
            _ => return None,
        };
        if member != node {
            return None;
        }
        // `ns.Enum.MEMBER` qualifies through a namespace import.
        let object_text = tree.text(object);
        let enum_name = object_text.rsplit('.').next().unwrap_or(object_text).trim();
        self.is_enum(enum_name)
            .then(|| format!("{}.{}", enum_name, tree.text(node)))
    }

    fn identifier_type(&self, tree: &SyntaxTree, node: NodeId) -> Result<String, ResolveError> {
        if let Some(member) = self.enum_member(tree, node) {
            return Ok(member);
        }

        let text = tree.text(node);
        if self.is_class(text) {
            let in_type_position = tree
                .parent(node)
                .is_some_and(|parent| tree.kind(parent) == SyntaxKind::TypeReference);
            return Ok(if in_type_position {
                text.to_string()
            } else {
                format!("typeof {text}")
            });
        }
        if self.is_enum(text) {
            return Ok(format!("typeof {text}"));
        }

        Err(ResolveError::Unresolved {
            kind: SyntaxKind::Identifier,
            text: text.to_string(),
        })
    }
}

impl TypeResolver for DeclarationResolver {
    fn type_name(&self, tree: &SyntaxTree, node: NodeId) -> Result<String, ResolveError> {
        match tree.kind(node) {
            SyntaxKind::ClassDeclaration => tree
                .first_child_of_kind(node, SyntaxKind::Identifier)
                .map(|name| tree.text(name).to_string())
                .ok_or(ResolveError::Unresolved {
                    kind: SyntaxKind::ClassDeclaration,
                    text: String::new(),
                }),
            SyntaxKind::PropertyDeclaration => {
                tree.type_hint(node)
                    .map(str::to_string)
                    .ok_or_else(|| ResolveError::Unresolved {
                        kind: SyntaxKind::PropertyDeclaration,
                        text: tree.text(node).to_string(),
                    })
            }
            SyntaxKind::Identifier => self.identifier_type(tree, node),
            kind => Err(ResolveError::Unsupported(kind)),
        }
    }
}
