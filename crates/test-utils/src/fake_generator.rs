use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use cssdts::generate::DeclarationGenerator;

/// A fake generator that:
/// - records every path it was asked to generate for
/// - returns a fixed declaration naming the file
/// - fails for paths registered with `fail_on`.
#[derive(Debug, Clone, Default)]
pub struct FakeGenerator {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.failing.lock().unwrap().insert(path.into());
    }

    /// Paths generated so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    pub fn declaration_for(path: &Path) -> String {
        format!("// fake declaration for {}\n", path.display())
    }
}

impl DeclarationGenerator for FakeGenerator {
    fn generate<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(source.to_path_buf());
            if self.failing.lock().unwrap().contains(source) {
                return Err(anyhow!("fake failure for {:?}", source));
            }
            Ok(Self::declaration_for(source))
        })
    }
}
