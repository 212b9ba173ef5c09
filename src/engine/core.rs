// src/engine/core.rs

//! Pure decision logic for change events.
//!
//! No filesystem access happens here, which keeps the guard order and the
//! transition table testable on their own.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::matcher::PathMatcher;
use crate::paths::PathMapper;
use crate::types::ChangeKind;

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Relocated mode and the path is not under the source root.
    OutsideSourceRoot,
    /// Not matched by `include`, or matched by `ignore`/the declaration
    /// exclusion.
    OutOfScope,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OutsideSourceRoot => f.write_str("outside source root"),
            SkipReason::OutOfScope => f.write_str("not an in-scope stylesheet"),
        }
    }
}

/// What the IO shell should do for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactorAction {
    Ignore(SkipReason),
    /// (Re)generate the declaration for this stylesheet.
    Generate(PathBuf),
    /// Remove `declaration`, which belongs to the deleted `source`.
    RemoveDeclaration { source: PathBuf, declaration: PathBuf },
}

#[derive(Debug, Clone)]
pub struct ReactorCore {
    matcher: PathMatcher,
    mapper: PathMapper,
}

impl ReactorCore {
    pub fn new(matcher: PathMatcher, mapper: PathMapper) -> Self {
        Self { matcher, mapper }
    }

    /// Apply the guards, then the transition table.
    ///
    /// Guards run in order: source-root scope first, then include/ignore.
    /// `Create` and `Update` are handled identically.
    pub fn decide(&self, path: &Path, kind: ChangeKind) -> ReactorAction {
        if !self.mapper.source_is_under_scope(path) {
            return ReactorAction::Ignore(SkipReason::OutsideSourceRoot);
        }
        if !self.matcher.is_in_scope(path) {
            return ReactorAction::Ignore(SkipReason::OutOfScope);
        }

        let source = self.mapper.absolute(path);
        match kind {
            ChangeKind::Create | ChangeKind::Update => ReactorAction::Generate(source),
            ChangeKind::Delete => {
                let declaration = self.mapper.declaration_path_for(&source);
                ReactorAction::RemoveDeclaration { source, declaration }
            }
        }
    }
}
