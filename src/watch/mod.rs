// src/watch/mod.rs

//! File watching.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Turning raw notify events into [`ChangeKind`]s.
//! - Feeding them, one at a time and in arrival order, to the
//!   [`ChangeReactor`].
//!
//! It does **not** decide which files matter; that is the reactor's job.
//!
//! [`ChangeKind`]: crate::types::ChangeKind
//! [`ChangeReactor`]: crate::engine::ChangeReactor

pub mod events;
pub mod watcher;

pub use events::classify_event;
pub use watcher::{spawn_watcher, WatcherHandle};
