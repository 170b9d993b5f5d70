//! oxc-backed parser producing [`SyntaxTree`]s.

use oxc_allocator::Allocator;
use oxc_ast::AstKind;
use oxc_ast::ast::{Expression, MethodDefinitionKind, PropertyDefinition};
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

use crate::error::{AnalysisError, Result};
use crate::syntax::{SyntaxKind, SyntaxTree, SyntaxTreeBuilder};

/// Parse TypeScript `source` into a syntax tree.
///
/// # Errors
///
/// [`AnalysisError::Parse`] if the parser reports any error.
pub fn parse_source(file_path: &str, source: &str) -> Result<SyntaxTree> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(file_path).unwrap_or_else(|_| SourceType::ts());
    let ret = Parser::new(&allocator, source, source_type).parse();

    if !ret.errors.is_empty() {
        return Err(AnalysisError::Parse {
            path: file_path.to_string(),
            errors: ret.errors.len(),
        });
    }

    let mut visitor = TreeVisitor {
        builder: SyntaxTreeBuilder::new(file_path, source),
        source,
        opened: Vec::new(),
        last_identifier: None,
    };
    visitor.visit_program(&ret.program);
    Ok(visitor.builder.finish())
}

struct TreeVisitor<'s> {
    builder: SyntaxTreeBuilder,
    source: &'s str,
    /// Whether each entered AST node opened a tree node.
    opened: Vec<bool>,
    /// Span of the most recently materialized identifier.
    last_identifier: Option<Span>,
}

impl<'a> Visit<'a> for TreeVisitor<'_> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        let Some(syntax_kind) = syntax_kind(&kind) else {
            self.opened.push(false);
            return;
        };

        let span = kind.span();
        if syntax_kind == SyntaxKind::Identifier {
            // Shorthand specifiers and properties (`{ Add }`) carry two
            // identifiers over the same text; only the first is kept.
            if self.last_identifier == Some(span) {
                self.opened.push(false);
                return;
            }
            self.last_identifier = Some(span);
        }
        let id = self.builder.open(syntax_kind, span.start, span.end);
        if let AstKind::PropertyDefinition(prop) = kind {
            if let Some(hint) = property_type_hint(prop, self.source) {
                self.builder.set_type_hint(id, hint);
            }
        }
        self.opened.push(true);
    }

    fn leave_node(&mut self, _kind: AstKind<'a>) {
        if self.opened.pop() == Some(true) {
            self.builder.close();
        }
    }
}

/// Tree kind for an AST node; `None` for nodes that are not materialized.
fn syntax_kind(kind: &AstKind<'_>) -> Option<SyntaxKind> {
    let mapped = match kind {
        // The root already exists, and export wrappers are transparent so
        // exported classes are top-level.
        AstKind::Program(_)
        | AstKind::ExportNamedDeclaration(_)
        | AstKind::ExportDefaultDeclaration(_) => return None,
        AstKind::Class(_) => SyntaxKind::ClassDeclaration,
        AstKind::PropertyDefinition(_) => SyntaxKind::PropertyDeclaration,
        AstKind::MethodDefinition(method) => match method.kind {
            MethodDefinitionKind::Constructor => SyntaxKind::Constructor,
            MethodDefinitionKind::Method => SyntaxKind::MethodDeclaration,
            MethodDefinitionKind::Get | MethodDefinitionKind::Set => SyntaxKind::Accessor,
        },
        AstKind::IdentifierReference(_)
        | AstKind::BindingIdentifier(_)
        | AstKind::IdentifierName(_) => SyntaxKind::Identifier,
        AstKind::StaticMemberExpression(_) => SyntaxKind::PropertyAccessExpression,
        AstKind::NewExpression(_) => SyntaxKind::NewExpression,
        AstKind::SwitchStatement(_) => SyntaxKind::SwitchStatement,
        AstKind::Decorator(_) => SyntaxKind::Decorator,
        AstKind::TSTypeReference(_) => SyntaxKind::TypeReference,
        AstKind::TSEnumDeclaration(_) => SyntaxKind::EnumDeclaration,
        _ => SyntaxKind::Other,
    };
    Some(mapped)
}

fn span_text(source: &str, span: Span) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

/// Declared type of a class property, as TypeScript would infer it.
///
/// An annotation wins. Without one, a string initializer is its literal type
/// when the property is `readonly` and `string` otherwise; other initializers
/// are taken verbatim.
fn property_type_hint(prop: &PropertyDefinition<'_>, source: &str) -> Option<String> {
    if let Some(annotation) = &prop.type_annotation {
        let text = span_text(source, annotation.type_annotation.span());
        return Some(normalize_literal(text));
    }

    match prop.value.as_ref()? {
        Expression::StringLiteral(literal) if prop.readonly => {
            Some(format!("\"{}\"", literal.value))
        }
        Expression::StringLiteral(_) => Some("string".to_string()),
        value => Some(span_text(source, value.span()).to_string()),
    }
}

/// Quoted literal types are printed with double quotes.
fn normalize_literal(text: &str) -> String {
    let text = text.trim();
    let quoted = text.len() >= 2
        && ((text.starts_with('\'') && text.ends_with('\''))
            || (text.starts_with('"') && text.ends_with('"')));
    if quoted {
        format!("\"{}\"", &text[1..text.len() - 1])
    } else {
        text.to_string()
    }
}
