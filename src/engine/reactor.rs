// src/engine/reactor.rs

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::engine::core::{ReactorAction, ReactorCore};
use crate::engine::driver::GenerationDriver;
use crate::engine::ReactorOutcome;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::types::ChangeKind;

/// Applies change events to the declaration tree.
///
/// Stateless between events: every event is judged against the frozen
/// configuration held by [`ReactorCore`]. Events are not debounced or
/// coalesced; each one is handled in full.
#[derive(Debug)]
pub struct ChangeReactor {
    core: ReactorCore,
    driver: GenerationDriver,
    fs: Arc<dyn FileSystem>,
}

impl ChangeReactor {
    pub fn new(core: ReactorCore, driver: GenerationDriver, fs: Arc<dyn FileSystem>) -> Self {
        Self { core, driver, fs }
    }

    pub fn core(&self) -> &ReactorCore {
        &self.core
    }

    /// Handle one event, returning any failure to the caller.
    pub async fn handle(&self, path: &Path, kind: ChangeKind) -> Result<ReactorOutcome> {
        match self.core.decide(path, kind) {
            ReactorAction::Ignore(reason) => {
                debug!(path = ?path, %kind, %reason, "ignoring change");
                Ok(ReactorOutcome::Skipped(reason))
            }
            ReactorAction::Generate(source) => {
                let declaration = self.driver.generate(&source).await?;
                Ok(ReactorOutcome::Generated(declaration))
            }
            ReactorAction::RemoveDeclaration {
                source,
                declaration,
            } => {
                if !self.fs.exists(&declaration) {
                    debug!(source = ?source, declaration = ?declaration, "no declaration to remove");
                    return Ok(ReactorOutcome::NothingToDelete(declaration));
                }
                self.fs.remove_file(&declaration)?;
                info!(source = ?source, declaration = ?declaration, "declaration removed");
                Ok(ReactorOutcome::Deleted(declaration))
            }
        }
    }

    /// Handle one event on behalf of the watch loop.
    ///
    /// Never fails: errors are logged with the path and event kind and
    /// reported as [`ReactorOutcome::Failed`].
    pub async fn dispatch(&self, path: &Path, kind: ChangeKind) -> ReactorOutcome {
        match self.handle(path, kind).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(path = ?path, %kind, error = %err, "failed to apply change");
                ReactorOutcome::Failed
            }
        }
    }
}
