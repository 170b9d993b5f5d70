//! Action discovery: classes whose first field is a literal-typed `type`.

use ngv_config::PathFilters;
use ngv_graph::Usage;
use rustc_hash::FxHashMap;

use crate::error::ResolveError;
use crate::frontend::TypeResolver;
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Name of the discriminant field that marks an action class.
pub const DISCRIMINANT_FIELD: &str = "type";

/// A discovered action type and the references found to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub file_path: String,
    /// Line of the class declaration.
    pub line: u32,
    /// Resolved type of the class itself.
    pub class_type: String,
    /// Resolved type of the discriminant field.
    pub field_type: String,
    pub references: Vec<Reference>,
}

impl Action {
    /// Display name: the discriminant type without its first two `"` and with
    /// `/` separators.
    pub fn display_name(field_type: &str) -> String {
        field_type.replacen('"', "", 2).replace('\\', "/")
    }
}

/// One occurrence of an action's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub file_path: String,
    pub line: u32,
    pub usages: Vec<Usage>,
}

/// Resolved type name to index of the owning action.
///
/// Both the class type and the discriminant type are keys. A later action
/// registering the same key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    by_type: FxHashMap<String, usize>,
}

impl ActionTable {
    pub fn insert(&mut self, type_name: impl Into<String>, action: usize) {
        self.by_type.insert(type_name.into(), action);
    }

    pub fn get(&self, type_name: &str) -> Option<usize> {
        self.by_type.get(type_name).copied()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.by_type.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Actions found in a set of files, with the lookup table over them.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub actions: Vec<Action>,
    pub table: ActionTable,
}

impl Discovery {
    /// Scan the top-level classes of every actions file in `trees`.
    pub fn run<'t>(
        trees: impl IntoIterator<Item = &'t SyntaxTree>,
        resolver: &dyn TypeResolver,
        filters: &PathFilters,
    ) -> Self {
        let mut discovery = Self::default();

        for tree in trees {
            if !filters.is_actions_file(tree.file_path()) {
                continue;
            }
            for class in tree.children_of_kind(tree.root(), SyntaxKind::ClassDeclaration) {
                match inspect_class(tree, class, resolver) {
                    Ok(Some(action)) => discovery.register(action),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!(
                            file = tree.file_path(),
                            line = tree.line(class),
                            error = %e,
                            "skipping class"
                        );
                    }
                }
            }
        }

        discovery
    }

    fn register(&mut self, action: Action) {
        tracing::info!(action = %action.class_type, file = %action.file_path, "discovered action");
        let index = self.actions.len();
        self.table.insert(action.class_type.clone(), index);
        self.table.insert(action.field_type.clone(), index);
        self.actions.push(action);
    }
}

fn inspect_class(
    tree: &SyntaxTree,
    class: NodeId,
    resolver: &dyn TypeResolver,
) -> Result<Option<Action>, ResolveError> {
    let class_type = resolver.type_name(tree, class)?;
    let Some(field) = tree.first_descendant_of_kind(class, SyntaxKind::PropertyDeclaration) else {
        return Ok(None);
    };
    let field_type = resolver.type_name(tree, field)?;
    let Some(field_name) = tree.first_child_of_kind(field, SyntaxKind::Identifier) else {
        return Ok(None);
    };

    if tree.text(field_name) != DISCRIMINANT_FIELD || field_type == "string" {
        return Ok(None);
    }

    Ok(Some(Action {
        name: Action::display_name(&field_type),
        file_path: tree.file_path().to_string(),
        line: tree.line(class),
        class_type,
        field_type,
        references: Vec::new(),
    }))
}
