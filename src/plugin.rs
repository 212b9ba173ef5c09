// src/plugin.rs

//! Host lifecycle hooks.
//!
//! A build host drives the plugin in this order:
//!
//! 1. [`Plugin::new`] with user options (conflicts are rejected here).
//! 2. [`Plugin::config`] to contribute CSS-module settings to the host.
//! 3. [`Plugin::config_resolved`] once the project root is known.
//! 4. [`Plugin::build_start`] before the main build.
//! 5. [`Plugin::handle_change`] for every file event while serving.
//!
//! The `cssdts` binary plays the host itself (see [`crate::run`]).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::{PartialConfig, PluginOptions, ResolvedConfig};
use crate::engine::{
    ChangeReactor, GenerationDriver, GenerationSummary, ReactorCore, ReactorOutcome,
};
use crate::errors::{CssDtsError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::generate::{CssModuleGenerator, DeclarationGenerator, GeneratorOptions};
use crate::scan::scan;
use crate::types::{ChangeKind, ExecutionMode, LocalsConvention};

/// The slice of host configuration this plugin contributes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub css: CssConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssConfig {
    pub modules: CssModulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssModulesConfig {
    pub locals_convention: Option<LocalsConvention>,
}

/// State available once the project root is known.
#[derive(Debug)]
struct Resolved {
    config: Arc<ResolvedConfig>,
    driver: GenerationDriver,
    reactor: Arc<ChangeReactor>,
}

#[derive(Debug)]
pub struct Plugin {
    partial: PartialConfig,
    generator_options: GeneratorOptions,
    fs: Arc<dyn FileSystem>,
    generator: Option<Arc<dyn DeclarationGenerator>>,
    resolved: Option<Resolved>,
}

impl Plugin {
    pub const NAME: &'static str = "cssdts";

    pub fn new(options: PluginOptions) -> Result<Self> {
        let partial = PartialConfig::try_from(options)?;
        Ok(Self {
            partial,
            generator_options: GeneratorOptions::default(),
            fs: Arc::new(RealFileSystem),
            generator: None,
            resolved: None,
        })
    }

    /// Use another filesystem (tests use [`crate::fs::mock::MockFileSystem`]).
    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Replace the default [`CssModuleGenerator`].
    pub fn with_generator(mut self, generator: Arc<dyn DeclarationGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Config-contribution hook.
    ///
    /// Forces the host to export camelCase class names only and makes the
    /// generator declare exactly those names. The two settings always move
    /// together.
    pub fn config(&mut self, host: &mut HostConfig) {
        host.css.modules.locals_convention = Some(LocalsConvention::CamelCaseOnly);
        self.generator_options.camel_case = true;
    }

    /// Config-resolved hook: pin paths against `project_root` and build the
    /// driver and reactor for `mode`.
    pub fn config_resolved(&mut self, project_root: &Path, mode: ExecutionMode) -> Result<()> {
        let config = Arc::new(self.partial.clone().resolve(project_root, self.fs.as_ref())?);
        let mapper = Arc::new(config.mapper());

        let generator = match &self.generator {
            Some(generator) => Arc::clone(generator),
            None => Arc::new(CssModuleGenerator::new(
                Arc::clone(&self.fs),
                self.generator_options,
            )),
        };

        let driver = GenerationDriver::new(Arc::clone(&self.fs), generator, Arc::clone(&mapper), mode);
        let core = ReactorCore::new(config.matcher(), mapper.as_ref().clone());
        let reactor = Arc::new(ChangeReactor::new(core, driver.clone(), Arc::clone(&self.fs)));

        self.resolved = Some(Resolved {
            config,
            driver,
            reactor,
        });
        Ok(())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        self.generator_options
    }

    pub fn resolved_config(&self) -> Option<&ResolvedConfig> {
        self.resolved.as_ref().map(|r| r.config.as_ref())
    }

    pub fn reactor(&self) -> Result<Arc<ChangeReactor>> {
        Ok(Arc::clone(&self.state()?.reactor))
    }

    /// Every in-scope stylesheet under the scan root.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let state = self.state()?;
        let matcher = state.config.matcher();
        scan(self.fs.as_ref(), state.config.scan_root(), &matcher)
    }

    /// Build-start hook: discover every stylesheet and generate all
    /// declarations.
    ///
    /// In build mode any failure fails the hook; in watch mode failures are
    /// only logged.
    pub async fn build_start(&self) -> Result<GenerationSummary> {
        let state = self.state()?;
        let paths = self.discover()?;
        info!(count = paths.len(), root = ?state.config.scan_root(), "generating declarations");
        state.driver.generate_all(paths).await
    }

    /// Change-notification hook.
    ///
    /// `event` is the host's event name. An unknown name is a protocol
    /// violation and is returned as an error; failures while applying a
    /// known event are logged and reported as [`ReactorOutcome::Failed`].
    pub async fn handle_change(&self, path: &Path, event: &str) -> Result<ReactorOutcome> {
        let kind: ChangeKind = event.parse()?;
        let state = self.state()?;
        Ok(state.reactor.dispatch(path, kind).await)
    }

    fn state(&self) -> Result<&Resolved> {
        self.resolved.as_ref().ok_or_else(|| {
            CssDtsError::ConfigError(format!(
                "{} used before its configuration was resolved",
                Self::NAME
            ))
        })
    }
}
