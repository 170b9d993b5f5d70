//! The option set recognised by the analyzer and the graph builder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::filters::PathFilters;

/// Number of trailing path segments used to name reducer nodes.
pub const DEFAULT_REDUCER_NAME_DEPTH: usize = 1;

/// Options for a single analysis run.
///
/// Field names are snake_case so `NGV_EMPTY_REF` style environment variables
/// map onto them; the camelCase spellings are accepted as aliases in files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    /// Folder scanned for `.ts` sources.
    #[serde(default = "default_folder")]
    pub folder: PathBuf,

    /// Pattern erased from displayed file paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<String>,

    /// Pattern selecting the files searched for action declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<String>,

    /// Pattern excluding files from reference analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Keep references that carry no usage besides the fallback.
    #[serde(default, alias = "emptyRef")]
    pub empty_ref: bool,

    /// Trailing path segments shown in reducer node names.
    #[serde(default = "default_reducer_name_depth", alias = "reducerNameDepth")]
    pub reducer_name_depth: usize,

    /// File the exported analysis is written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<PathBuf>,
}

fn default_folder() -> PathBuf {
    PathBuf::from(".")
}

fn default_reducer_name_depth() -> usize {
    DEFAULT_REDUCER_NAME_DEPTH
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            remove: None,
            actions: None,
            exclude: None,
            empty_ref: false,
            reducer_name_depth: DEFAULT_REDUCER_NAME_DEPTH,
            save: None,
        }
    }
}

impl AnalyzerOptions {
    /// Options analysing `folder` with everything else defaulted.
    pub fn for_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value (for programmatic configuration)
    ///
    /// # Example
    ///
    /// ```
    /// use ngv_config::AnalyzerOptions;
    /// use serde_json::json;
    ///
    /// let options = AnalyzerOptions::from_value(json!({
    ///     "folder": "src",
    ///     "emptyRef": true
    /// }))
    /// .unwrap();
    /// assert!(options.empty_ref);
    /// assert_eq!(options.reducer_name_depth, 1);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "options".to_string(),
            hint: e.to_string(),
        })
    }

    /// Compile the pattern options into filters.
    pub fn compile(&self) -> Result<PathFilters> {
        PathFilters::new(
            self.remove.as_deref(),
            self.actions.as_deref(),
            self.exclude.as_deref(),
        )
    }
}

/// Explicitly provided option values; absent fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_ref: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reducer_name_depth: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<PathBuf>,
}
