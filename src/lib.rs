// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod generate;
pub mod logging;
pub mod matcher;
pub mod paths;
pub mod plugin;
pub mod scan;
pub mod types;
pub mod watch;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{OutputLayout, PluginOptions, load_options};
use crate::plugin::{HostConfig, Plugin};
use crate::types::ExecutionMode;

/// Options for a CLI invocation: the config file (if any) with the
/// command-line flags laid over it.
pub fn options_from_args(args: &CliArgs) -> crate::errors::Result<PluginOptions> {
    let file_options = load_options(args.config.as_deref(), &args.project_root())?;
    Ok(file_options.merged_with(args.overrides()))
}

/// High-level entry point used by `main.rs`.
///
/// This acts as the build host:
/// - construct the plugin and run its config hooks
/// - generate every declaration once
/// - (optional) watch the tree and keep declarations in sync
/// - Ctrl-C handling
pub async fn run(args: CliArgs, options: PluginOptions) -> Result<()> {
    let mode = if args.watch {
        ExecutionMode::Watch
    } else {
        ExecutionMode::Build
    };

    let mut plugin = Plugin::new(options)?;
    let mut host = HostConfig::default();
    plugin.config(&mut host);
    debug!(?host, generator = ?plugin.generator_options(), "host configuration contributed");
    plugin.config_resolved(&args.project_root(), mode)?;

    if args.dry_run {
        print_dry_run(&plugin)?;
        return Ok(());
    }

    let summary = plugin.build_start().await?;
    info!(written = summary.written, failed = summary.failed, "initial generation complete");

    if mode == ExecutionMode::Build {
        return Ok(());
    }

    let watch_root = plugin
        .resolved_config()
        .map(|c| c.scan_root().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("configuration not resolved"))?;
    let _watcher = crate::watch::spawn_watcher(watch_root, plugin.reactor()?)?;

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received; stopping watcher");
    Ok(())
}

/// Simple dry-run output: resolved settings and what would be generated.
fn print_dry_run(plugin: &Plugin) -> Result<()> {
    let config = plugin
        .resolved_config()
        .ok_or_else(|| anyhow::anyhow!("configuration not resolved"))?;
    let mapper = config.mapper();

    println!("cssdts dry-run");
    println!("  project_root = {}", config.project_root.display());
    match &config.layout {
        OutputLayout::InPlace => println!("  output = in place"),
        OutputLayout::Relocated {
            output_root,
            source_root,
        } => {
            println!("  root_dir = {}", output_root.display());
            println!("  src_dir = {}", source_root.display());
        }
    }
    println!("  include = {:?}", config.include);
    println!("  ignore = {:?}", config.ignore);
    println!();

    let paths = plugin.discover()?;
    println!("stylesheets ({}):", paths.len());
    for path in paths {
        println!("  - {}", path.display());
        println!("      -> {}", mapper.declaration_path_for(&path).display());
    }

    debug!("dry-run complete (nothing written)");
    Ok(())
}
