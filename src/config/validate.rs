// src/config/validate.rs

use std::path::PathBuf;

use crate::config::DEFAULT_INCLUDE;
use crate::config::model::{PatternSpec, PluginOptions};
use crate::errors::{CssDtsError, Result};
use crate::matcher::PatternSet;

/// Options that passed validation but are not yet tied to a project root.
///
/// Patterns are already compiled, so a bad glob or regex is reported when
/// the plugin is constructed rather than on the first file event.
#[derive(Debug, Clone)]
pub struct PartialConfig {
    pub include: PatternSet,
    pub ignore: PatternSet,
    pub root_dir: Option<PathBuf>,
    pub src_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl TryFrom<PluginOptions> for PartialConfig {
    type Error = CssDtsError;

    fn try_from(options: PluginOptions) -> std::result::Result<Self, Self::Error> {
        let include_specs = effective_include(&options)?;
        let ignore_specs = options.ignore.unwrap_or_default();

        if options.src_dir.is_some() && options.root_dir.is_none() {
            tracing::warn!("`src_dir` has no effect without `root_dir`; declarations are written in place");
        }

        Ok(PartialConfig {
            include: PatternSet::compile(&include_specs)?,
            ignore: PatternSet::compile(&ignore_specs)?,
            root_dir: options.root_dir,
            src_dir: options.src_dir,
            verbose: options.verbose,
        })
    }
}

/// Decide which include patterns apply.
///
/// - `include` and `file_extension` together are rejected.
/// - `file_extension` values become `**/*<ext>` globs.
/// - With neither, [`DEFAULT_INCLUDE`] is used.
fn effective_include(options: &PluginOptions) -> Result<Vec<PatternSpec>> {
    match (&options.include, &options.file_extension) {
        (Some(_), Some(_)) => Err(CssDtsError::ConfigError(
            "`include` and the deprecated `file_extension` cannot be used together; use `include` only"
                .to_string(),
        )),
        (Some(include), None) => {
            if include.is_empty() {
                return Err(CssDtsError::ConfigError(
                    "`include` must contain at least one pattern".to_string(),
                ));
            }
            Ok(include.clone())
        }
        (None, Some(extensions)) => {
            tracing::warn!("`file_extension` is deprecated; use `include` instead");
            if extensions.is_empty() {
                return Err(CssDtsError::ConfigError(
                    "`file_extension` must contain at least one extension".to_string(),
                ));
            }
            extensions.iter().map(|ext| extension_glob(ext)).collect()
        }
        (None, None) => Ok(vec![PatternSpec::glob(DEFAULT_INCLUDE)]),
    }
}

fn extension_glob(ext: &str) -> Result<PatternSpec> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return Err(CssDtsError::ConfigError(
            "`file_extension` entries must not be empty".to_string(),
        ));
    }
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    Ok(PatternSpec::glob(format!("**/*.{ext}")))
}
