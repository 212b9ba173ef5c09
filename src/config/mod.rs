// src/config/mod.rs

//! Configuration for cssdts.
//!
//! Responsibilities:
//! - Define the TOML-backed option model (`model.rs`).
//! - Load options from disk (`loader.rs`).
//! - Validate options into a [`PartialConfig`] (`validate.rs`).
//! - Pin paths against the project root into a [`ResolvedConfig`]
//!   (`resolve.rs`).
//!
//! Resolution happens in two steps because the project root is only known
//! once the host has settled its own configuration.

pub mod loader;
pub mod model;
pub mod resolve;
pub mod validate;

pub use loader::{default_config_path, load_from_path, load_options};
pub use model::{PatternSpec, PluginOptions};
pub use resolve::{OutputLayout, ResolvedConfig};
pub use validate::PartialConfig;

/// Include pattern used when neither `include` nor `file_extension` is set.
pub const DEFAULT_INCLUDE: &str = "**/*.module.css";

/// Directory used as the mirroring base when `src_dir` is not set and it
/// exists under the project root.
pub const DEFAULT_SRC_DIR: &str = "src";
