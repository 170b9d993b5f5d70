//! # ngv-analysis
//!
//! Static analysis of NgRx TypeScript sources.
//!
//! The pipeline is:
//!
//! 1. [`walker`] finds the `.ts` files of a folder.
//! 2. [`frontend`] parses each file into a [`syntax::SyntaxTree`] and builds a
//!    [`frontend::DeclarationResolver`] over all of them.
//! 3. [`discovery`] finds action classes: a class whose first field is a
//!    `type` with a narrower type than `string`.
//! 4. [`analyzer`] collects every identifier whose type is an action type and
//!    [`usage`] classifies how it is used.
//! 5. The result is exported as [`ngv_graph::ActionExport`]s, the input of the
//!    graph builder.
//!
//! ```no_run
//! use ngv_config::AnalyzerOptions;
//!
//! let result = ngv_analysis::analyze(&AnalyzerOptions::for_folder("src"))?;
//! println!("{}", result.to_json()?);
//! # Ok::<(), ngv_analysis::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod discovery;
pub mod error;
pub mod frontend;
pub mod result;
pub mod syntax;
pub mod usage;
pub mod walker;

use std::fs;

use ngv_config::AnalyzerOptions;

pub use analyzer::{ProjectAnalyzer, export_actions};
pub use discovery::{Action, Discovery, Reference};
pub use error::{AnalysisError, ResolveError, Result};
pub use frontend::{DeclarationResolver, TypeResolver, parse_source};
pub use result::AnalysisResult;

/// Analyse the folder named by `options`.
///
/// Files that fail to parse are skipped and reported in
/// [`AnalysisResult::warnings`].
///
/// # Errors
///
/// Invalid patterns, a missing folder and unreadable files.
pub fn analyze(options: &AnalyzerOptions) -> Result<AnalysisResult> {
    let filters = options.compile()?;

    tracing::info!(folder = %options.folder.display(), "discovering files");
    let sources = walker::discover_sources(&options.folder)?;
    tracing::info!(files = sources.len(), "parsing sources");

    let mut trees = Vec::with_capacity(sources.len());
    let mut warnings = Vec::new();
    for path in &sources {
        let source = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.clone(),
            source,
        })?;
        match parse_source(&path.to_string_lossy(), &source) {
            Ok(tree) => trees.push(tree),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                warnings.push(e.to_string());
            }
        }
    }

    let resolver = DeclarationResolver::from_trees(&trees);
    let actions = ProjectAnalyzer::new(&trees, &resolver, &filters).run();
    let exported = export_actions(&actions, &filters, options.empty_ref);

    let result = AnalysisResult {
        actions: exported,
        files_parsed: trees.len(),
        files_skipped: sources.len() - trees.len(),
        warnings,
    };
    tracing::info!(
        actions = result.actions.len(),
        references = result.reference_count(),
        "analysis complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests;
