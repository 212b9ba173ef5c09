#![allow(dead_code)]

use std::path::PathBuf;

use cssdts::config::{PatternSpec, PluginOptions};

/// Builder for `PluginOptions` to simplify test setup.
#[derive(Default)]
pub struct OptionsBuilder {
    options: PluginOptions,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: &str) -> Self {
        self.options
            .include
            .get_or_insert_with(Vec::new)
            .push(PatternSpec::glob(pattern));
        self
    }

    pub fn include_regex(mut self, pattern: &str) -> Self {
        self.options
            .include
            .get_or_insert_with(Vec::new)
            .push(PatternSpec::regex(pattern));
        self
    }

    pub fn ignore(mut self, pattern: &str) -> Self {
        self.options
            .ignore
            .get_or_insert_with(Vec::new)
            .push(PatternSpec::glob(pattern));
        self
    }

    pub fn ignore_regex(mut self, pattern: &str) -> Self {
        self.options
            .ignore
            .get_or_insert_with(Vec::new)
            .push(PatternSpec::regex(pattern));
        self
    }

    pub fn file_extension(mut self, ext: &str) -> Self {
        self.options
            .file_extension
            .get_or_insert_with(Vec::new)
            .push(ext.to_string());
        self
    }

    pub fn root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.root_dir = Some(dir.into());
        self
    }

    pub fn src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.src_dir = Some(dir.into());
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.options.verbose = val;
        self
    }

    pub fn build(self) -> PluginOptions {
        self.options
    }
}
