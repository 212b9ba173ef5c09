// src/engine/mod.rs

//! Generation and change handling.
//!
//! - [`core`] holds the pure decision logic: given a path and a change
//!   kind, what should happen (ignore, generate, remove a declaration).
//! - [`driver`] performs generation and writes declaration files; it is the
//!   only writer of declarations.
//! - [`reactor`] is the IO shell that turns watcher events into driver
//!   calls and deletions, and contains every failure so the watch loop
//!   survives.

use std::path::PathBuf;

pub mod core;
pub mod driver;
pub mod reactor;

pub use core::{ReactorAction, ReactorCore, SkipReason};
pub use driver::{GenerationDriver, GenerationSummary};
pub use reactor::ChangeReactor;

/// What handling a single change event ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactorOutcome {
    /// The event was filtered out before any work.
    Skipped(SkipReason),
    /// A declaration was (re)written at this path.
    Generated(PathBuf),
    /// The declaration at this path was removed.
    Deleted(PathBuf),
    /// Delete event, but there was no declaration at this path.
    NothingToDelete(PathBuf),
    /// Generation or deletion failed; the error has been logged.
    Failed,
}
