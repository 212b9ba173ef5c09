// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{PatternSpec, PluginOptions};

/// Command-line arguments for `cssdts`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cssdts",
    version,
    about = "Generate and keep in sync TypeScript declarations for CSS modules.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root. Patterns and relative paths are resolved against it.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `cssdts.toml` in the project root, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep running and update declarations as stylesheets change.
    #[arg(long)]
    pub watch: bool,

    /// Print the resolved configuration and discovered stylesheets, then
    /// exit without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Include glob (repeatable). Replaces `include` from the config file.
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Include regular expression (repeatable).
    #[arg(long, value_name = "REGEX")]
    pub include_regex: Vec<String>,

    /// Ignore glob (repeatable). Replaces `ignore` from the config file.
    #[arg(long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Ignore regular expression (repeatable).
    #[arg(long, value_name = "REGEX")]
    pub ignore_regex: Vec<String>,

    /// Deprecated: stylesheet extension (repeatable). Conflicts with
    /// `--include`.
    #[arg(long, value_name = "EXT")]
    pub file_extension: Vec<String>,

    /// Write declarations under this directory instead of next to each
    /// stylesheet.
    #[arg(long, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Base directory mirrored under `--root-dir`.
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// Log diagnostic messages.
    #[arg(long, short)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CSSDTS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Options given on the command line, to be laid over the config file.
    pub fn overrides(&self) -> PluginOptions {
        PluginOptions {
            include: patterns(&self.include, &self.include_regex),
            ignore: patterns(&self.ignore, &self.ignore_regex),
            file_extension: if self.file_extension.is_empty() {
                None
            } else {
                Some(self.file_extension.clone())
            },
            root_dir: self.root_dir.clone(),
            src_dir: self.src_dir.clone(),
            verbose: self.verbose,
        }
    }

    pub fn project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

fn patterns(globs: &[String], regexes: &[String]) -> Option<Vec<PatternSpec>> {
    if globs.is_empty() && regexes.is_empty() {
        return None;
    }
    let specs = globs
        .iter()
        .map(PatternSpec::glob)
        .chain(regexes.iter().map(PatternSpec::regex))
        .collect();
    Some(specs)
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
