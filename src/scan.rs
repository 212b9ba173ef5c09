// src/scan.rs

//! Startup discovery of every in-scope stylesheet.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::matcher::PathMatcher;

/// Directory names that are never descended into, whatever the ignore
/// patterns say.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| SKIPPED_DIRS.contains(&name))
        .unwrap_or(false)
}

/// Walk `root` recursively and return every file the matcher accepts.
///
/// Directories are always traversed (patterns are only applied to files).
/// The result is sorted and free of duplicates; directories reached twice
/// through symlinks are only walked once.
///
/// An unreadable `root` is an error. Unreadable subdirectories are logged
/// and skipped.
pub fn scan(fs: &dyn FileSystem, root: &Path, matcher: &PathMatcher) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    let mut visited = HashSet::new();

    let top = fs
        .read_dir(root)
        .with_context(|| format!("scanning stylesheet root {:?}", root))?;
    visited.insert(fs.canonicalize(root).unwrap_or_else(|_| root.to_path_buf()));

    let mut stack = vec![top];
    while let Some(entries) = stack.pop() {
        for path in entries {
            if fs.is_dir(&path) {
                if is_skipped_dir(&path) {
                    debug!(?path, "skipping dependency directory");
                    continue;
                }
                let key = fs.canonicalize(&path).unwrap_or_else(|_| path.clone());
                if !visited.insert(key) {
                    continue;
                }
                match fs.read_dir(&path) {
                    Ok(children) => stack.push(children),
                    Err(err) => warn!(?path, error = %err, "failed to read directory; skipping"),
                }
            } else if fs.is_file(&path) && matcher.is_in_scope(&path) {
                found.insert(path);
            }
        }
    }

    debug!(root = ?root, count = found.len(), "discovery finished");
    Ok(found.into_iter().collect())
}
