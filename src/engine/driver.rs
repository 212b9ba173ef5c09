// src/engine/driver.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::errors::{CssDtsError, Result};
use crate::fs::FileSystem;
use crate::generate::DeclarationGenerator;
use crate::paths::PathMapper;
use crate::types::ExecutionMode;

/// Counts from a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub written: usize,
    pub failed: usize,
}

/// Generates declarations and writes them where the [`PathMapper`] says.
///
/// Cheap to clone; clones share the filesystem, generator and mapper.
#[derive(Clone)]
pub struct GenerationDriver {
    fs: Arc<dyn FileSystem>,
    generator: Arc<dyn DeclarationGenerator>,
    mapper: Arc<PathMapper>,
    mode: ExecutionMode,
}

impl fmt::Debug for GenerationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationDriver")
            .field("mode", &self.mode)
            .field("layout", self.mapper.layout())
            .finish_non_exhaustive()
    }
}

impl GenerationDriver {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        generator: Arc<dyn DeclarationGenerator>,
        mapper: Arc<PathMapper>,
        mode: ExecutionMode,
    ) -> Self {
        Self {
            fs,
            generator,
            mapper,
            mode,
        }
    }

    /// Generate and write the declaration for one stylesheet.
    ///
    /// Returns the declaration path. Errors are returned as-is whatever the
    /// mode; batch runs route them in [`GenerationDriver::generate_all`] and
    /// watch events in [`crate::engine::ChangeReactor::dispatch`].
    pub async fn generate(&self, source: &Path) -> Result<PathBuf> {
        let source = self.mapper.absolute(source);

        let text = self
            .generator
            .generate(&source)
            .await
            .map_err(|e| CssDtsError::Generation {
                path: source.clone(),
                reason: format!("{e:#}"),
            })?;

        let declaration = self.mapper.declaration_path_for(&source);
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = declaration.parent() {
                self.fs.create_dir_all(parent)?;
            }
            self.fs.write(&declaration, text.as_bytes())
        };
        write().map_err(|e| CssDtsError::Generation {
            path: source.clone(),
            reason: format!("{e:#}"),
        })?;

        info!(source = ?source, declaration = ?declaration, "declaration written");
        Ok(declaration)
    }

    /// Generate declarations for every path concurrently.
    ///
    /// All generations run to completion even if some fail. Every failure
    /// is logged; in `Build` mode any failure turns into a single
    /// [`CssDtsError::BuildFailed`] naming the first failure in path order.
    pub async fn generate_all(&self, paths: Vec<PathBuf>) -> Result<GenerationSummary> {
        let total = paths.len();
        let mut set = JoinSet::new();
        for path in paths {
            let driver = self.clone();
            set.spawn(async move {
                let result = driver.generate(&path).await;
                (path, result)
            });
        }

        let mut summary = GenerationSummary::default();
        let mut failures: Vec<(PathBuf, String)> = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((_, Ok(_))) => summary.written += 1,
                Ok((path, Err(err))) => {
                    error!(path = ?path, error = %err, "declaration generation failed");
                    failures.push((path, err.to_string()));
                }
                Err(join_err) => {
                    error!(error = %join_err, "generation task aborted");
                    failures.push((PathBuf::new(), join_err.to_string()));
                }
            }
        }
        summary.failed = failures.len();

        debug!(total, written = summary.written, failed = summary.failed, "batch generation finished");

        if self.mode == ExecutionMode::Build && !failures.is_empty() {
            failures.sort();
            let first = failures.swap_remove(0).1;
            return Err(CssDtsError::BuildFailed {
                failed: summary.failed,
                total,
                first,
            });
        }
        Ok(summary)
    }
}
