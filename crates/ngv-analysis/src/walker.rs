//! Source file discovery.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AnalysisError, Result};

/// Extension of the files analysed.
pub const SOURCE_EXTENSION: &str = "ts";

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Every `.ts` file under `folder`, as absolute cleaned paths in sorted order.
///
/// # Errors
///
/// [`AnalysisError::FolderNotFound`] if `folder` is not a directory, and
/// [`AnalysisError::Walk`] if a directory cannot be read.
pub fn discover_sources(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AnalysisError::FolderNotFound(folder.to_path_buf()));
    }
    let root = absolute(folder)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
    {
        let entry = entry.map_err(|source| AnalysisError::Walk {
            path: root.clone(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    tracing::debug!(folder = %root.display(), files = files.len(), "discovered sources");
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map(|p| p.clean())
        .map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_ts_files_recursively_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src/b")).unwrap();
        fs::create_dir_all(root.join("node_modules/lib")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::write(root.join("src/b/z.ts"), "").unwrap();
        fs::write(root.join("src/a.ts"), "").unwrap();
        fs::write(root.join("src/a.js"), "").unwrap();
        fs::write(root.join("src/view.tsx"), "").unwrap();
        fs::write(root.join("node_modules/lib/index.ts"), "").unwrap();
        fs::write(root.join(".cache/x.ts"), "").unwrap();

        let files = discover_sources(root).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert!(files.iter().all(|f| f.is_absolute()));
        assert_eq!(
            relative,
            vec![PathBuf::from("src/a.ts"), PathBuf::from("src/b/z.ts")]
        );
    }

    #[test]
    fn missing_folder_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = discover_sources(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, AnalysisError::FolderNotFound(_)));
    }
}
