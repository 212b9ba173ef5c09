use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::CssDtsError;

/// Kind of change reported for a single path.
///
/// Renames and moves are not modelled; watchers report them as a
/// `Delete` of the old path followed by a `Create` of the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Create => "create",
            ChangeKind::Update => "update",
            ChangeKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the event names used by the host's change hook.
///
/// Anything other than `create`, `update` or `delete` means the host
/// contract changed underneath us, so it is reported as a
/// [`CssDtsError::ProtocolViolation`] rather than ignored.
impl FromStr for ChangeKind {
    type Err = CssDtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(ChangeKind::Create),
            "update" => Ok(ChangeKind::Update),
            "delete" => Ok(ChangeKind::Delete),
            other => Err(CssDtsError::ProtocolViolation(format!(
                "unknown change event {other:?} (expected \"create\", \"update\" or \"delete\")"
            ))),
        }
    }
}

/// How failures during generation are routed.
///
/// - `Build`: one-shot build; any failure aborts the build.
/// - `Watch`: interactive session; failures are logged and the session
///   keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Build,
    Watch,
}

/// Class-name export convention of the host's CSS-module pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalsConvention {
    AsIs,
    CamelCase,
    CamelCaseOnly,
    Dashes,
    DashesOnly,
}
