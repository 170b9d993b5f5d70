use std::fmt;
use std::fs;
use std::path::Path;

use ngv_graph::ActionExport;

use crate::error::{AnalysisError, Result};

/// Outcome of [`analyze`](crate::analyze).
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// Exported actions, in discovery order.
    pub actions: Vec<ActionExport>,
    pub files_parsed: usize,
    /// Files left out because they failed to parse.
    pub files_skipped: usize,
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    pub fn reference_count(&self) -> usize {
        self.actions.iter().map(|action| action.references.len()).sum()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The exported analysis as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.actions)?)
    }

    /// Write [`to_json`](Self::to_json) to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Result")?;
        writeln!(f, "===============")?;
        writeln!(f, "Files parsed: {}", self.files_parsed)?;
        writeln!(f, "Files skipped: {}", self.files_skipped)?;
        writeln!(f, "Actions: {}", self.actions.len())?;
        writeln!(f, "References: {}", self.reference_count())?;
        writeln!(f, "Warnings: {}", self.warnings.len())?;

        if self.has_warnings() {
            writeln!(f, "\nWarnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  - {}", warning)?;
            }
        }

        Ok(())
    }
}
