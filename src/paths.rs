// src/paths.rs

//! Path normalisation and the stylesheet → declaration mapping.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use pathdiff::diff_paths;

use crate::config::OutputLayout;

/// Suffix appended to a stylesheet path to name its declaration file.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Make `path` absolute against `base` and fold `.` / `..` components.
///
/// Purely lexical: the path does not have to exist and symlinks are not
/// followed. `..` never climbs above the filesystem root.
pub fn normalize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a path with forward slashes, as globs expect.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// True for generated declaration files (`*.d.ts`). These are never treated
/// as stylesheets, whatever the include patterns say.
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(DECLARATION_SUFFIX))
        .unwrap_or(false)
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (e.g. due to symlinks or different absolute prefixes),
///   we canonicalize both paths and try again. A path that no longer exists
///   is resolved through its parent directory, so a deleted file relates to
///   `root` the same way it did while it existed.
///
/// Returns `None` if the path cannot be reasonably related to `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(to_slash(rel));
    }

    // macOS reports watcher paths under /private/var for /var and similar.
    if let (Ok(root_canon), Some(path_canon)) = (root.canonicalize(), canonicalize_via_parent(path)) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return Some(to_slash(rel));
        }
    }

    None
}

fn canonicalize_via_parent(path: &Path) -> Option<PathBuf> {
    if let Ok(canon) = path.canonicalize() {
        return Some(canon);
    }
    let parent = path.parent()?.canonicalize().ok()?;
    Some(parent.join(path.file_name()?))
}

fn with_declaration_suffix(path: PathBuf) -> PathBuf {
    let mut name: OsString = path.into_os_string();
    name.push(DECLARATION_SUFFIX);
    PathBuf::from(name)
}

/// Maps stylesheet paths to the declaration files generated for them.
///
/// The mapping is recomputed on every call; nothing is cached, so it can
/// never go stale.
#[derive(Debug, Clone)]
pub struct PathMapper {
    project_root: PathBuf,
    layout: OutputLayout,
}

impl PathMapper {
    pub fn new(project_root: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        Self {
            project_root: project_root.into(),
            layout,
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Absolute, normalised form of `path` (relative paths are taken from the
    /// project root).
    pub fn absolute(&self, path: &Path) -> PathBuf {
        normalize(&self.project_root, path)
    }

    /// Declaration path for a stylesheet.
    ///
    /// - In place: `dir/foo.module.css` → `dir/foo.module.css.d.ts`.
    /// - Relocated: `<source_root>/a/b.css` → `<output_root>/a/b.css.d.ts`.
    ///
    /// A relocated stylesheet outside the source root maps through `..`
    /// components; callers reject those paths first via
    /// [`PathMapper::source_is_under_scope`].
    pub fn declaration_path_for(&self, source: &Path) -> PathBuf {
        let source = self.absolute(source);
        match &self.layout {
            OutputLayout::InPlace => with_declaration_suffix(source),
            OutputLayout::Relocated {
                output_root,
                source_root,
            } => {
                let rel = match relative_str(source_root, &source) {
                    Some(rel) => PathBuf::from(rel),
                    None => diff_paths(&source, source_root).unwrap_or_else(|| {
                        source.file_name().map(PathBuf::from).unwrap_or_default()
                    }),
                };
                with_declaration_suffix(normalize(output_root, &rel))
            }
        }
    }

    /// Whether `source` lies inside the tree being mirrored. Always true in
    /// place.
    pub fn source_is_under_scope(&self, source: &Path) -> bool {
        match &self.layout {
            OutputLayout::InPlace => true,
            OutputLayout::Relocated { source_root, .. } => {
                relative_str(source_root, &self.absolute(source)).is_some()
            }
        }
    }
}
