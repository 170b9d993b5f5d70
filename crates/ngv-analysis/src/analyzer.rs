//! Project-wide analysis: action discovery followed by reference aggregation.

use ngv_config::PathFilters;
use ngv_graph::{ActionExport, ReferenceExport, Usage};

use crate::discovery::{Action, Discovery, Reference};
use crate::frontend::{TypeResolver, strip_typeof};
use crate::syntax::{SyntaxKind, SyntaxTree};
use crate::usage::classify;

/// Runs discovery and aggregation over a parsed project.
///
/// # Example
///
/// ```
/// use ngv_analysis::analyzer::ProjectAnalyzer;
/// use ngv_analysis::frontend::{DeclarationResolver, parse_source};
/// use ngv_config::PathFilters;
///
/// let trees = vec![
///     parse_source("todo.actions.ts", "export class Add { readonly type = '[Todo] Add'; }").unwrap(),
///     parse_source("todo.component.ts", "class C { add() { this.store.dispatch(new Add()); } }").unwrap(),
/// ];
/// let resolver = DeclarationResolver::from_trees(&trees);
/// let filters = PathFilters::permissive();
///
/// let actions = ProjectAnalyzer::new(&trees, &resolver, &filters).run();
/// assert_eq!(actions.len(), 1);
/// assert_eq!(actions[0].name, "[Todo] Add");
/// ```
pub struct ProjectAnalyzer<'a> {
    trees: &'a [SyntaxTree],
    resolver: &'a dyn TypeResolver,
    filters: &'a PathFilters,
}

impl<'a> ProjectAnalyzer<'a> {
    pub fn new(
        trees: &'a [SyntaxTree],
        resolver: &'a dyn TypeResolver,
        filters: &'a PathFilters,
    ) -> Self {
        Self {
            trees,
            resolver,
            filters,
        }
    }

    /// Discovered actions with their references filled in.
    pub fn run(&self) -> Vec<Action> {
        let mut discovery = Discovery::run(self.trees, self.resolver, self.filters);
        tracing::info!(actions = discovery.actions.len(), "action discovery complete");
        self.aggregate(&mut discovery);
        discovery.actions
    }

    /// Attach every reference to a discovered action type.
    pub fn aggregate(&self, discovery: &mut Discovery) {
        for tree in self.trees {
            if self.filters.is_excluded(tree.file_path()) {
                tracing::debug!(file = tree.file_path(), "excluded from reference analysis");
                continue;
            }

            let mut found = 0usize;
            for node in tree.descendants_of_kind(tree.root(), SyntaxKind::Identifier) {
                let Ok(type_name) = self.resolver.type_name(tree, node) else {
                    continue;
                };
                let Some(index) = discovery.table.get(strip_typeof(&type_name)) else {
                    continue;
                };

                let reference = Reference {
                    file_path: tree.file_path().to_string(),
                    line: tree.line(node),
                    usages: classify(tree, node),
                };
                discovery.actions[index].references.push(reference);
                found += 1;
            }

            tracing::debug!(file = tree.file_path(), references = found, "aggregated references");
        }
    }
}

/// Exported form of `actions`.
///
/// Paths go through [`PathFilters::format_path`] and the `Unknown` fallback is
/// left out of each usage list. References with nothing left are dropped
/// unless `empty_ref` is set.
pub fn export_actions(actions: &[Action], filters: &PathFilters, empty_ref: bool) -> Vec<ActionExport> {
    actions
        .iter()
        .map(|action| ActionExport {
            name: action.name.clone(),
            file_path: filters.format_path(&action.file_path),
            line: action.line,
            references: action
                .references
                .iter()
                .filter_map(|reference| export_reference(reference, filters, empty_ref))
                .collect(),
        })
        .collect()
}

fn export_reference(
    reference: &Reference,
    filters: &PathFilters,
    empty_ref: bool,
) -> Option<ReferenceExport> {
    let usages: Vec<Usage> = reference
        .usages
        .iter()
        .filter(|usage| !matches!(usage, Usage::Unknown))
        .cloned()
        .collect();
    if usages.is_empty() && !empty_ref {
        return None;
    }
    Some(ReferenceExport {
        file_path: filters.format_path(&reference.file_path),
        line: reference.line,
        usages,
    })
}
