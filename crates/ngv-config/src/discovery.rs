//! Config file discovery and layered option loading.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};

use crate::error::{ConfigError, Result};
use crate::options::{AnalyzerOptions, OptionOverrides};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["ngv.config.json", "ngv.config.toml"];

/// Prefix of the environment variables that feed options.
pub const ENV_PREFIX: &str = "NGV_";

/// Searches a directory for an ngv config file.
///
/// # Example
///
/// ```no_run
/// use ngv_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// if let Some(path) = discovery.find() {
///     println!("using {}", path.display());
/// }
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// First existing file out of [`CONFIG_FILE_NAMES`].
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load options using the discovered file, if any.
    pub fn load(&self, overrides: &OptionOverrides) -> Result<AnalyzerOptions> {
        let found = self.find();
        load_options(found.as_deref(), overrides)
    }
}

/// Load options from defaults, `config_path`, `NGV_*` variables and `overrides`.
///
/// Priority: overrides > environment > config file > field defaults.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when `config_path` does not exist,
/// [`ConfigError::UnsupportedFormat`] when its extension is neither `json`
/// nor `toml`, and [`ConfigError::Load`] when a layer holds an invalid value.
pub fn load_options(
    config_path: Option<&Path>,
    overrides: &OptionOverrides,
) -> Result<AnalyzerOptions> {
    // Defaults come from the serde field defaults; a serialized defaults layer
    // would collide with the camelCase aliases used in files.
    let mut figment = Figment::new();

    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "loading config file");
        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => figment.merge(Json::file(path)),
            Some("toml") => figment.merge(Toml::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
    }

    figment = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
