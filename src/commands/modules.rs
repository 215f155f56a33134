//! Implementation of the `depscan modules` command.

use super::require_config;
use crate::cli::ModulesArgs;
use crate::config::Config;
use crate::error::{DepscanError, Result};
use crate::module::Module;

/// Execute the `depscan modules` command.
pub fn cmd_modules(args: ModulesArgs, config: Option<&Config>) -> Result<()> {
    let config = require_config(config)?;
    let modules = config.modules();

    if args.json {
        println!("{}", render_json(modules)?);
        return Ok(());
    }

    if modules.is_empty() {
        println!("No modules configured.");
        return Ok(());
    }
    print!("{}", render_table(modules));
    Ok(())
}

fn render_json(modules: &[Module]) -> Result<String> {
    serde_json::to_string_pretty(modules).map_err(|e| DepscanError::Serialization(e.to_string()))
}

fn render_table(modules: &[Module]) -> String {
    let name_width = modules
        .iter()
        .map(|m| m.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<name_width$}  {:<10}  PATH\n", "NAME", "TYPE");
    for module in modules {
        out.push_str(&format!(
            "{:<name_width$}  {:<10}  {}\n",
            module.name,
            module.module_type.as_str(),
            module.dir
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> Config {
        Config::from_yaml(
            r#"
version: 1
analyze:
  modules:
    - name: frontend
      path: ./web
      type: npm
      options:
        strategy: yarn
    - name: api
      path: ./api
      type: mvn
"#,
        )
        .unwrap()
    }

    #[test]
    fn table_lists_modules_in_order() {
        let config = sample();
        let out = render_table(config.modules());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("frontend  nodejs"));
        assert!(lines[1].ends_with("./web"));
        assert!(lines[2].starts_with("api       maven"));
    }

    #[test]
    fn json_uses_canonical_type_names() {
        let config = sample();
        let json: Value = serde_json::from_str(&render_json(config.modules()).unwrap()).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "frontend");
        assert_eq!(entries[0]["type"], "nodejs");
        assert_eq!(entries[0]["build_target"], "./web");
        assert_eq!(entries[0]["dir"], "./web");
        assert_eq!(entries[0]["options"]["strategy"], "yarn");
        assert_eq!(entries[1]["type"], "maven");
        assert!(entries[1].get("options").is_none());
    }

    #[test]
    fn modules_requires_config() {
        let err = cmd_modules(ModulesArgs { json: false }, None).unwrap_err();
        assert!(matches!(err, DepscanError::UserError(_)));
    }
}
