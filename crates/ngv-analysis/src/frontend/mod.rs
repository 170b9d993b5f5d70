//! Source front end: parsing into [`SyntaxTree`]s and type resolution.

mod parser;
mod resolver;

pub use parser::parse_source;
pub use resolver::DeclarationResolver;

use crate::error::ResolveError;
use crate::syntax::{NodeId, SyntaxTree};

/// Resolves the type of a node as canonical text.
///
/// Type-level references to a class or enum `X` resolve to `"typeof X"`.
pub trait TypeResolver {
    fn type_name(&self, tree: &SyntaxTree, node: NodeId) -> Result<String, ResolveError>;
}

/// Type name with a leading `typeof ` qualifier removed.
pub fn strip_typeof(type_name: &str) -> &str {
    type_name.strip_prefix("typeof ").unwrap_or(type_name)
}
