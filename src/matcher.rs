// src/matcher.rs

//! Include/ignore matching for stylesheet paths.

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::config::PatternSpec;
use crate::errors::{CssDtsError, Result};
use crate::paths::{is_declaration_file, normalize, relative_str, to_slash};

/// A compiled list of glob and regex patterns.
#[derive(Clone)]
pub struct PatternSet {
    specs: Vec<PatternSpec>,
    globs: GlobSet,
    regexes: Vec<Regex>,
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.specs.iter().map(|s| s.to_string())).finish()
    }
}

impl PatternSet {
    pub fn compile(specs: &[PatternSpec]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut regexes = Vec::new();

        for spec in specs {
            match spec {
                PatternSpec::Glob(pattern) => {
                    let glob = Glob::new(pattern).map_err(|e| CssDtsError::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })?;
                    builder.add(glob);
                }
                PatternSpec::Regex { regex } => {
                    let re = Regex::new(regex).map_err(|e| CssDtsError::InvalidPattern {
                        pattern: regex.clone(),
                        reason: e.to_string(),
                    })?;
                    regexes.push(re);
                }
            }
        }

        let globs = builder.build().map_err(|e| CssDtsError::InvalidPattern {
            pattern: specs
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            reason: e.to_string(),
        })?;

        Ok(Self {
            specs: specs.to_vec(),
            globs,
            regexes,
        })
    }

    pub fn empty() -> Self {
        Self {
            specs: Vec::new(),
            globs: GlobSet::empty(),
            regexes: Vec::new(),
        }
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Globs are tested against the base-relative path; regexes match if
    /// they hit either the relative or the absolute form.
    fn is_match(&self, rel: &str, abs: &str) -> bool {
        self.globs.is_match(rel) || self.regexes.iter().any(|re| re.is_match(rel) || re.is_match(abs))
    }
}

/// Decides whether a path is an in-scope stylesheet.
///
/// Paths are normalised against `base` first, so `src/a.module.css` and
/// `<base>/src/a.module.css` always get the same answer. A path reached
/// through a symlink into `base` is related to it the way
/// [`relative_str`] does; paths outside `base` are matched by their
/// absolute form.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    base: PathBuf,
    include: PatternSet,
    ignore: PatternSet,
}

impl PathMatcher {
    pub fn new(base: impl Into<PathBuf>, include: PatternSet, ignore: PatternSet) -> Self {
        Self {
            base: base.into(),
            include,
            ignore,
        }
    }

    /// True if `path` matches an include pattern and no ignore pattern, and
    /// is not itself a generated declaration file.
    pub fn is_in_scope(&self, path: &Path) -> bool {
        let (rel, abs) = self.forms(path);
        self.include.is_match(&rel, &abs) && !self.excluded(path, &rel, &abs)
    }

    /// True if `path` is removed by the ignore patterns or the implicit
    /// declaration-file exclusion.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let (rel, abs) = self.forms(path);
        self.excluded(path, &rel, &abs)
    }

    fn excluded(&self, path: &Path, rel: &str, abs: &str) -> bool {
        is_declaration_file(path) || self.ignore.is_match(rel, abs)
    }

    fn forms(&self, path: &Path) -> (String, String) {
        let abs = normalize(&self.base, path);
        let rel = relative_str(&self.base, &abs).unwrap_or_else(|| to_slash(&abs));
        (rel, to_slash(&abs))
    }
}
