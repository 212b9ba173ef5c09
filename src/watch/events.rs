// src/watch/events.rs

use notify::EventKind;
use notify::event::{CreateKind, ModifyKind, RemoveKind};

use crate::types::ChangeKind;

/// Map a notify event kind onto a [`ChangeKind`].
///
/// - creations become `Create`, content changes `Update`, removals `Delete`;
/// - a rename is reported per path: `Create` if the path exists now,
///   `Delete` otherwise;
/// - directory creation/removal, metadata changes and access events are not
///   content changes and map to `None`.
pub fn classify_event(kind: &EventKind, path_exists: bool) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(CreateKind::Folder) => None,
        EventKind::Create(_) => Some(ChangeKind::Create),
        EventKind::Modify(ModifyKind::Name(_)) => Some(if path_exists {
            ChangeKind::Create
        } else {
            ChangeKind::Delete
        }),
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(_) => Some(ChangeKind::Update),
        EventKind::Remove(RemoveKind::Folder) => None,
        EventKind::Remove(_) => Some(ChangeKind::Delete),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
    }
}
