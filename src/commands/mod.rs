//! Command implementations for depscan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config lookup every command shares.

mod modules;
mod settings;
mod show;

use crate::cli::{Cli, Command};
use crate::config::{self, Config};
use crate::error::{DepscanError, Result};
use crate::module::ModuleType;
use std::path::Path;
use tracing::info;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    // Listing types never depends on the config, even a broken one.
    if let Command::Types = cli.command {
        return cmd_types();
    }

    let cwd = std::env::current_dir().map_err(|e| {
        DepscanError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Validate => cmd_validate(config.as_ref()),
        Command::Show => show::cmd_show(&cli.overrides, config.as_ref()),
        Command::Modules(args) => modules::cmd_modules(args, config.as_ref()),
        Command::Types => cmd_types(),
    }
}

/// Load the config named by `--config`, or the default one in `dir`.
///
/// A missing default file is not an error: `Ok(None)` lets commands that can
/// run on flags alone carry on. An explicit path must exist.
pub(crate) fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<Config>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config::discover(dir) {
            Some(path) => path,
            None => {
                info!(dir = %dir.display(), "no config file found");
                return Ok(None);
            }
        },
    };

    let config = Config::load(&path)?;
    info!(path = %path.display(), modules = config.modules().len(), "loaded config");
    Ok(Some(config))
}

fn require_config(config: Option<&Config>) -> Result<&Config> {
    config.ok_or_else(|| {
        DepscanError::UserError(
            "no config file found.\n\n\
             Create .depscan.yml in the current directory or pass --config <path>."
                .to_string(),
        )
    })
}

fn cmd_validate(config: Option<&Config>) -> Result<()> {
    let config = require_config(config)?;
    println!("{}", validate_summary(config));
    Ok(())
}

fn validate_summary(config: &Config) -> String {
    let count = config.modules().len();
    let noun = if count == 1 { "module" } else { "modules" };
    match config.title() {
        "" => format!("config OK: {} {}", count, noun),
        title => format!("config OK: {} ({} {})", title, count, noun),
    }
}

fn cmd_types() -> Result<()> {
    print!("{}", render_types());
    Ok(())
}

fn render_types() -> String {
    ModuleType::ALL
        .iter()
        .map(|t| format!("{:<10} {}\n", t.as_str(), t.tags().join(", ")))
        .collect()
}
