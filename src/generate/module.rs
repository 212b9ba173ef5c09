// src/generate/module.rs

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::fs::FileSystem;
use crate::generate::css::{extract_class_names, render_declaration, to_camel_case};
use crate::generate::{DeclarationGenerator, GeneratorOptions};

/// Default generator: reads a CSS module and declares its class names.
#[derive(Debug, Clone)]
pub struct CssModuleGenerator {
    fs: Arc<dyn FileSystem>,
    options: GeneratorOptions,
}

impl CssModuleGenerator {
    pub fn new(fs: Arc<dyn FileSystem>, options: GeneratorOptions) -> Self {
        Self { fs, options }
    }

    /// Synchronous core of [`DeclarationGenerator::generate`].
    pub fn render(&self, source: &Path) -> Result<String> {
        render_file(self.fs.as_ref(), self.options, source)
    }
}

fn render_file(fs: &dyn FileSystem, options: GeneratorOptions, source: &Path) -> Result<String> {
    let css = fs.read_to_string(source)?;
    let classes = extract_class_names(&css).with_context(|| format!("parsing stylesheet {:?}", source))?;

    let exported: Vec<String> = if options.camel_case {
        classes
            .iter()
            .map(|name| to_camel_case(name))
            .filter(|name| !name.is_empty())
            .collect()
    } else {
        classes.into_iter().collect()
    };

    Ok(render_declaration(exported.iter().map(String::as_str)))
}

impl DeclarationGenerator for CssModuleGenerator {
    fn generate<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let fs = Arc::clone(&self.fs);
        let options = self.options;
        let source: PathBuf = source.to_path_buf();

        Box::pin(async move {
            tokio::task::spawn_blocking(move || render_file(fs.as_ref(), options, &source))
                .await
                .context("declaration generator task panicked")?
        })
    }
}
