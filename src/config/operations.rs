//! Config loading, validation, and accessors.

use super::model::{Config, RawConfig};
use super::types::{DEFAULT_CONFIG_FILES, SUPPORTED_VERSION};
use crate::error::ConfigError;
use crate::module::{Module, ModuleType};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

type LoadResult<T> = std::result::Result<T, ConfigError>;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ConfigError::Io)` - The file could not be read
    /// * `Err(_)` - Any error from [`Config::from_slice`]
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");

        let data = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&data)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> LoadResult<Self> {
        Self::from_slice(yaml.as_bytes())
    }

    /// Parse and validate config from raw bytes.
    ///
    /// The document is first read as a loose mapping so that `version` can be
    /// checked on its own: a `version: "1"` is reported as a wrong version,
    /// not as a type error somewhere in the typed decode. Only then is the
    /// mapping decoded and every module entry resolved.
    ///
    /// Merge keys (`<<: *anchor`) are applied. Unknown fields are ignored,
    /// including ones whose key is not a string. Missing optional fields read
    /// as empty.
    pub fn from_slice(data: &[u8]) -> LoadResult<Self> {
        let mut document: Value = serde_yaml::from_slice(data).map_err(ConfigError::Decode)?;
        document.apply_merge().map_err(ConfigError::Decode)?;

        // An empty file is an empty mapping, which then fails the version check.
        let mut mapping: Mapping = match document {
            Value::Null => Mapping::new(),
            other => serde_yaml::from_value(other).map_err(ConfigError::Decode)?,
        };

        let version = mapping.get("version").and_then(Value::as_i64);
        if version != Some(SUPPORTED_VERSION) {
            debug!(?version, "rejecting config with unsupported version");
            return Err(ConfigError::WrongVersion);
        }

        drop_non_string_keys(&mut mapping);
        let raw: RawConfig =
            serde_yaml::from_value(Value::Mapping(mapping)).map_err(ConfigError::Schema)?;

        let modules = raw
            .analyze
            .modules
            .iter()
            .map(|entry| {
                let module_type = ModuleType::parse(&entry.module_type).map_err(|source| {
                    ConfigError::UnknownModuleType {
                        module: entry.name.clone(),
                        tag: entry.module_type.clone(),
                        source,
                    }
                })?;
                trace!(name = %entry.name, %module_type, path = %entry.path, "resolved module");

                Ok(Module {
                    name: entry.name.clone(),
                    module_type,
                    build_target: entry.path.clone(),
                    dir: entry.path.clone(),
                    options: entry.options.clone(),
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        debug!(modules = modules.len(), "config loaded");
        Ok(Config {
            version: raw.version,
            cli: raw.cli,
            analyze: raw.analyze,
            modules,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.cli.api_key
    }

    pub fn server(&self) -> &str {
        &self.cli.server
    }

    /// Title for the uploaded project; falls back to the project name.
    pub fn title(&self) -> &str {
        if self.cli.title.is_empty() {
            &self.cli.project
        } else {
            &self.cli.title
        }
    }

    pub fn fetcher(&self) -> &str {
        &self.cli.fetcher
    }

    pub fn project(&self) -> &str {
        &self.cli.project
    }

    pub fn branch(&self) -> &str {
        &self.cli.branch
    }

    pub fn revision(&self) -> &str {
        &self.cli.revision
    }

    /// Resolved modules, in the order they were declared.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}

/// Remove keys that cannot name a field from every typed block.
///
/// Derived field visitors reject a key like `1:` outright, but such keys can
/// never match a field, so they are unknown fields like any other. `options`
/// is left alone; it is decoded as a string-keyed map.
fn drop_non_string_keys(root: &mut Mapping) {
    retain_string_keys(root);

    if let Some(cli) = root.get_mut("cli").and_then(Value::as_mapping_mut) {
        retain_string_keys(cli);
    }

    let Some(analyze) = root.get_mut("analyze").and_then(Value::as_mapping_mut) else {
        return;
    };
    retain_string_keys(analyze);

    if let Some(entries) = analyze.get_mut("modules").and_then(Value::as_sequence_mut) {
        for entry in entries.iter_mut().filter_map(Value::as_mapping_mut) {
            retain_string_keys(entry);
        }
    }
}

fn retain_string_keys(mapping: &mut Mapping) {
    *mapping = std::mem::take(mapping)
        .into_iter()
        .filter(|(key, _)| key.is_string())
        .collect();
}

/// Find the default config file in `dir`.
///
/// Returns the first of [`DEFAULT_CONFIG_FILES`] that exists as a file, or
/// `None` when there is no config to load.
pub fn discover<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let dir = dir.as_ref();
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
