// src/generate/mod.rs

//! Stylesheet → declaration text.
//!
//! The rest of the crate only sees [`DeclarationGenerator`]; the default
//! implementation is [`CssModuleGenerator`], and tests substitute their own.

use std::fmt::Debug;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

pub mod css;
pub mod module;

pub use css::{CssSyntaxError, extract_class_names, render_declaration, to_camel_case};
pub use module::CssModuleGenerator;

/// Options shared with the host's CSS-module pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Export camelCased class names only. Always set together with the
    /// host's `camelCaseOnly` locals convention.
    pub camel_case: bool,
}

/// Produces declaration text for one stylesheet.
pub trait DeclarationGenerator: Send + Sync + Debug {
    /// Read `source` and render its declaration.
    ///
    /// Fails when the stylesheet cannot be read or is malformed.
    fn generate<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}
