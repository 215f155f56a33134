//! Config struct definitions for `.depscan.yml`.

use super::types::null_as_default;
use crate::module::Module;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A loaded and validated depscan config file.
///
/// Built only through the loaders in `operations`, which check the version
/// and resolve every module entry before handing one out. Read-only after that.
#[derive(Debug, Clone)]
pub struct Config {
    /// Schema version. Always `1` once loaded.
    pub(crate) version: i64,

    /// Upload and project settings.
    pub(crate) cli: CliProperties,

    /// Analysis targets as written.
    pub(crate) analyze: AnalyzeProperties,

    /// Modules resolved from `analyze.modules`, in declaration order.
    pub(crate) modules: Vec<Module>,
}

/// The document shape decoded before module resolution.
#[derive(Debug, Deserialize)]
pub(super) struct RawConfig {
    pub(super) version: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) cli: CliProperties,

    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) analyze: AnalyzeProperties,
}

/// The `cli` block. Every field is optional; absent and `null` both read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliProperties {
    // =========================================================================
    // Upload settings
    // =========================================================================
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: String,

    #[serde(deserialize_with = "null_as_default")]
    pub server: String,

    // =========================================================================
    // Project metadata
    // =========================================================================
    /// How revision info is found. Empty means the custom fetcher.
    #[serde(deserialize_with = "null_as_default")]
    pub fetcher: String,

    #[serde(deserialize_with = "null_as_default")]
    pub project: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "null_as_default")]
    pub revision: String,

    /// Only read by the custom fetcher.
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
}

/// The `analyze` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzeProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<ModuleProperties>,
}

/// One entry under `analyze.modules`, before its type is resolved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Used as both build target and working directory.
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub module_type: String,

    /// Free-form, interpreted by the ecosystem analyzer.
    #[serde(deserialize_with = "null_as_default")]
    pub options: BTreeMap<String, serde_yaml::Value>,
}
