use std::fs;
use std::path::{Path, PathBuf};

use ngv_config::{AnalyzerOptions, ConfigDiscovery, OptionOverrides, load_options};

use crate::error::{Result, ResultExt};

/// Load options from `config` when given, otherwise from a config file in the
/// working directory if there is one.
pub(crate) fn load(config: Option<&Path>, overrides: &OptionOverrides) -> Result<AnalyzerOptions> {
    let options = match config {
        Some(path) => load_options(Some(path), overrides)?,
        None => ConfigDiscovery::new(get_cwd()?).load(overrides)?,
    };
    Ok(options)
}

pub(crate) fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read the working directory")
}

/// Write `contents` to `path`, creating missing parent directories.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
    }
    fs::write(path, contents).with_path(path)?;
    Ok(())
}
