//! Compiled path filters shared by discovery, aggregation and export.

use regex::Regex;

use crate::error::{ConfigError, Result};

/// The pattern options of [`AnalyzerOptions`](crate::AnalyzerOptions), compiled.
///
/// An empty pattern behaves like an absent one.
#[derive(Debug, Clone, Default)]
pub struct PathFilters {
    remove: Option<Regex>,
    actions: Option<Regex>,
    exclude: Option<Regex>,
}

impl PathFilters {
    pub fn new(remove: Option<&str>, actions: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            remove: compile("remove", remove)?,
            actions: compile("actions", actions)?,
            exclude: compile("exclude", exclude)?,
        })
    }

    /// Filters that accept every file and leave paths untouched.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Path as displayed in exports: the first match of the removal pattern
    /// is erased and Windows separators become `/`.
    pub fn format_path(&self, path: &str) -> String {
        let stripped = match &self.remove {
            Some(regex) => regex.replace(path, "").into_owned(),
            None => path.to_string(),
        };
        stripped.replace('\\', "/")
    }

    /// Whether `path` is searched for action declarations.
    pub fn is_actions_file(&self, path: &str) -> bool {
        self.actions.as_ref().is_none_or(|regex| regex.is_match(path))
    }

    /// Whether `path` is skipped during reference analysis.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.as_ref().is_some_and(|regex| regex.is_match(path))
    }
}

fn compile(field: &'static str, pattern: Option<&str>) -> Result<Option<Regex>> {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    Regex::new(pattern)
        .map(Some)
        .map_err(|e| ConfigError::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
