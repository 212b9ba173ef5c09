// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::PluginOptions;
use crate::errors::Result;

/// File name looked up in the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "cssdts.toml";

/// Load options from a TOML file.
///
/// This only performs deserialization; conflicting options are reported when
/// the options are turned into a [`crate::config::PartialConfig`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PluginOptions> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let options: PluginOptions = toml::from_str(&contents)?;

    Ok(options)
}

/// Load options for a project.
///
/// - An explicit `config_path` must exist.
/// - Otherwise `<project_root>/cssdts.toml` is used if present.
/// - Otherwise all defaults apply.
pub fn load_options(config_path: Option<&Path>, project_root: &Path) -> Result<PluginOptions> {
    if let Some(path) = config_path {
        debug!(?path, "loading explicit config file");
        return load_from_path(path);
    }

    let default_path = default_config_path(project_root);
    if default_path.is_file() {
        debug!(path = ?default_path, "loading project config file");
        load_from_path(&default_path)
    } else {
        debug!("no config file found; using defaults");
        Ok(PluginOptions::default())
    }
}

pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}
