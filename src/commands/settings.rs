//! Effective project settings: command-line flags merged over the config file.

use crate::cli::Overrides;
use crate::config::Config;
use crate::config::types::DEFAULT_FETCHER;
use tracing::{debug, warn};

/// Project and upload settings after applying overrides and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub server: String,
    pub fetcher: String,
    pub project: String,
    pub title: String,
    pub revision: String,
    pub branch: String,
}

impl Settings {
    /// Merge flags over config values.
    ///
    /// A non-empty flag wins over the file. The fetcher defaults to `custom`
    /// and the title defaults to the (merged) project.
    pub fn resolve(overrides: &Overrides, config: Option<&Config>) -> Self {
        let project = pick(&overrides.project, from_file(config, Config::project));
        // The raw title, not `Config::title`, so an overridden project is the fallback.
        let title = pick(&overrides.title, from_file(config, |c| c.cli.title.as_str()));
        let title = if title.is_empty() {
            project.clone()
        } else {
            title
        };

        let mut fetcher = pick(&overrides.fetcher, from_file(config, Config::fetcher));
        if fetcher.is_empty() {
            debug!("no fetcher configured, using '{}'", DEFAULT_FETCHER);
            fetcher = DEFAULT_FETCHER.to_string();
        }

        let branch = pick(&overrides.branch, from_file(config, Config::branch));
        if !branch.is_empty() && fetcher != DEFAULT_FETCHER {
            warn!(%branch, %fetcher, "branch is only used by the custom fetcher and will be ignored");
        }

        Self {
            api_key: pick(&overrides.api_key, from_file(config, Config::api_key)),
            server: pick(&overrides.server, from_file(config, Config::server)),
            fetcher,
            project,
            title,
            revision: pick(&overrides.revision, from_file(config, Config::revision)),
            branch,
        }
    }
}

fn from_file<'a>(config: Option<&'a Config>, get: impl Fn(&'a Config) -> &'a str) -> &'a str {
    config.map(get).unwrap_or_default()
}

fn pick(flag: &Option<String>, file: &str) -> String {
    match flag.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => file.to_string(),
    }
}
