//! CLI argument parsing for depscan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Depscan: dependency analysis driven by a `.depscan.yml` module list.
///
/// Project settings and analysis modules are read from the config file in
/// the current directory (or `--config`). Flags override file values.
#[derive(Parser, Debug)]
#[command(name = "depscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (default: .depscan.yml in the current directory).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags that take precedence over the `cli` block of the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// API key used for uploads.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Upload server URL.
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// How revision info is determined (default: custom).
    #[arg(long, global = true)]
    pub fetcher: Option<String>,

    /// Project identifier.
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Project title (default: the project identifier).
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Revision being analyzed.
    #[arg(long, global = true)]
    pub revision: Option<String>,

    /// Branch being analyzed (custom fetcher only).
    #[arg(long, global = true)]
    pub branch: Option<String>,
}

/// Available commands for depscan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the config file.
    ///
    /// Loads the config, verifies its version and every module type,
    /// and reports how many modules it declares.
    Validate,

    /// Show effective project settings.
    ///
    /// Prints the settings after merging flags over the config file.
    Show,

    /// List the modules declared in the config file.
    Modules(ModulesArgs),

    /// List supported module types and the tags that select them.
    Types,
}

/// Arguments for the `modules` command.
#[derive(Parser, Debug)]
pub struct ModulesArgs {
    /// Print modules as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
