// src/config/model.rs

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// User-facing options, as read from `cssdts.toml` or assembled from CLI
/// flags.
///
/// ```toml
/// include = ["**/*.module.css", { regex = "\\.styles\\.css$" }]
/// ignore = "**/__*"
/// root_dir = "types"
/// src_dir = "src"
/// verbose = true
/// ```
///
/// Every field is optional. `include`, `ignore` and `file_extension` accept
/// either a single value or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginOptions {
    /// Patterns selecting the stylesheets to process.
    #[serde(default, deserialize_with = "one_or_many")]
    pub include: Option<Vec<PatternSpec>>,

    /// Patterns removing stylesheets from the included set.
    #[serde(default, deserialize_with = "one_or_many")]
    pub ignore: Option<Vec<PatternSpec>>,

    /// Deprecated: extensions such as `.module.css`, turned into
    /// `**/*<ext>` include globs. Cannot be combined with `include`.
    #[serde(default, alias = "fileExtension", deserialize_with = "one_or_many")]
    pub file_extension: Option<Vec<String>>,

    /// Output root. When unset, declarations are written next to their
    /// stylesheet.
    #[serde(default, alias = "rootDir")]
    pub root_dir: Option<PathBuf>,

    /// Base of the mirrored tree when `root_dir` is set.
    #[serde(default, alias = "srcDir")]
    pub src_dir: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,
}

impl PluginOptions {
    /// Overlay `overrides` on top of `self`: every option set in `overrides`
    /// replaces the one in `self`. `verbose` is enabled if either side
    /// enables it.
    pub fn merged_with(self, overrides: PluginOptions) -> PluginOptions {
        PluginOptions {
            include: overrides.include.or(self.include),
            ignore: overrides.ignore.or(self.ignore),
            file_extension: overrides.file_extension.or(self.file_extension),
            root_dir: overrides.root_dir.or(self.root_dir),
            src_dir: overrides.src_dir.or(self.src_dir),
            verbose: self.verbose || overrides.verbose,
        }
    }
}

/// A single include/ignore pattern.
///
/// In TOML a plain string is a glob and a `{ regex = "..." }` table is a
/// regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Glob(String),
    Regex { regex: String },
}

impl PatternSpec {
    pub fn glob(pattern: impl Into<String>) -> Self {
        PatternSpec::Glob(pattern.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        PatternSpec::Regex {
            regex: pattern.into(),
        }
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSpec::Glob(glob) => write!(f, "{glob}"),
            PatternSpec::Regex { regex } => write!(f, "/{regex}/"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    }))
}
