//! cli
//!
//! Command-line interface layer for subway.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Line edits go through [`crate::core::path::LinePath`]
//! and persistence through [`crate::core::document::LineStore`]; handlers
//! only wire the two together and format the result.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::document::LineStore;
use crate::core::paths::StorePaths;
use crate::logging;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Root of line storage.
    pub data_dir: PathBuf,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl Context {
    /// Open the line store rooted at `data_dir`.
    pub fn store(&self) -> LineStore {
        LineStore::new(StorePaths::new(self.data_dir.clone()))
    }

    /// Print a human-readable message unless quiet or in JSON mode.
    pub fn say(&self, message: impl std::fmt::Display) {
        if !self.json {
            output::print(message, self.verbosity);
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let loaded = Config::load().context("Failed to load config")?;
    let config = loaded.config;

    let level = if cli.debug { "debug" } else { config.log_level() };
    logging::init_logging(level);

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    // CLI flag always takes precedence over the config file.
    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => config.data_dir().context(
            "Cannot determine data directory: no home directory. Pass --data-dir or set data_dir in config",
        )?,
    };

    let ctx = Context {
        data_dir,
        verbosity,
        json: cli.json || config.output_format() == "json",
    };
    tracing::debug!(data_dir = %ctx.data_dir.display(), json = ctx.json, "starting");

    commands::dispatch(cli.command, &ctx)
}
