//! Implementation of the `depscan show` command.
//!
//! Displays the project settings that an analysis or upload would use.

use super::settings::Settings;
use crate::cli::Overrides;
use crate::config::Config;
use crate::error::Result;

/// Execute the `depscan show` command.
///
/// Works without a config file; flags and defaults are shown on their own.
pub fn cmd_show(overrides: &Overrides, config: Option<&Config>) -> Result<()> {
    let settings = Settings::resolve(overrides, config);
    print!("{}", render(&settings));
    Ok(())
}

fn render(settings: &Settings) -> String {
    let api_key = if settings.api_key.is_empty() {
        "(not set)"
    } else {
        "(set)"
    };

    let mut out = String::new();
    out.push_str(&format!("Project:   {}\n", or_unset(&settings.project)));
    out.push_str(&format!("Title:     {}\n", or_unset(&settings.title)));
    out.push_str(&format!("Fetcher:   {}\n", settings.fetcher));
    out.push_str(&format!("Revision:  {}\n", or_unset(&settings.revision)));
    out.push_str(&format!("Branch:    {}\n", or_unset(&settings.branch)));
    out.push_str(&format!("Server:    {}\n", or_unset(&settings.server)));
    out.push_str(&format!("API key:   {}\n", api_key));
    out
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_hides_api_key() {
        let settings = Settings {
            api_key: "secret-key".to_string(),
            project: "acme".to_string(),
            title: "acme".to_string(),
            fetcher: "custom".to_string(),
            ..Default::default()
        };
        let out = render(&settings);

        assert!(!out.contains("secret-key"));
        assert!(out.contains("API key:   (set)"));
        assert!(out.contains("Project:   acme"));
        assert!(out.contains("Fetcher:   custom"));
        assert!(out.contains("Branch:    (not set)"));
    }

    #[test]
    fn show_runs_without_config() {
        assert!(cmd_show(&Overrides::default(), None).is_ok());
    }
}
