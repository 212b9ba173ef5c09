// src/config/resolve.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DEFAULT_SRC_DIR;
use crate::config::validate::PartialConfig;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::matcher::{PathMatcher, PatternSet};
use crate::paths::{PathMapper, normalize};

/// Where declaration files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<stylesheet>.d.ts` next to the stylesheet.
    InPlace,
    /// `<output_root>/<path relative to source_root>.d.ts`.
    Relocated {
        output_root: PathBuf,
        source_root: PathBuf,
    },
}

/// Fully resolved configuration. All paths are absolute and normalised.
///
/// Built once from a [`PartialConfig`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project_root: PathBuf,
    pub layout: OutputLayout,
    pub include: PatternSet,
    pub ignore: PatternSet,
    pub verbose: bool,
}

impl PartialConfig {
    /// Pin `root_dir` / `src_dir` against `project_root`.
    ///
    /// A relative `project_root` is taken relative to the current working
    /// directory, and an existing root is canonicalized so symlinked roots
    /// agree with the real paths the watcher reports. Without an explicit `src_dir`, `<project_root>/src` is used
    /// when it is a directory, otherwise the project root itself.
    pub fn resolve(self, project_root: &Path, fs: &dyn FileSystem) -> Result<ResolvedConfig> {
        let project_root = if project_root.is_absolute() {
            normalize(Path::new("/"), project_root)
        } else {
            normalize(&std::env::current_dir()?, project_root)
        };
        // Pin symlinked roots once; watcher events report real paths.
        let project_root = fs.canonicalize(&project_root).unwrap_or(project_root);

        let layout = match self.root_dir {
            None => OutputLayout::InPlace,
            Some(root_dir) => {
                let output_root = normalize(&project_root, &root_dir);
                let source_root = match self.src_dir {
                    Some(src_dir) => normalize(&project_root, &src_dir),
                    None => {
                        let conventional = project_root.join(DEFAULT_SRC_DIR);
                        if fs.is_dir(&conventional) {
                            conventional
                        } else {
                            project_root.clone()
                        }
                    }
                };
                OutputLayout::Relocated {
                    output_root,
                    source_root,
                }
            }
        };

        debug!(root = ?project_root, ?layout, "configuration resolved");

        Ok(ResolvedConfig {
            project_root,
            layout,
            include: self.include,
            ignore: self.ignore,
            verbose: self.verbose,
        })
    }
}

impl ResolvedConfig {
    pub fn matcher(&self) -> PathMatcher {
        PathMatcher::new(&self.project_root, self.include.clone(), self.ignore.clone())
    }

    pub fn mapper(&self) -> PathMapper {
        PathMapper::new(&self.project_root, self.layout.clone())
    }

    /// Directory walked at startup and watched afterwards.
    ///
    /// In relocated mode only the source root is relevant: anything outside
    /// it has no place in the mirrored tree.
    pub fn scan_root(&self) -> &Path {
        match &self.layout {
            OutputLayout::InPlace => &self.project_root,
            OutputLayout::Relocated { source_root, .. } => source_root,
        }
    }
}
