//! Analysis targets resolved from the config file.
//!
//! A [`Module`] is one unit of work for an ecosystem analyzer: a named
//! directory bound to a [`ModuleType`], plus free-form options that only the
//! analyzer for that ecosystem knows how to read.

pub mod types;

pub use types::{ModuleType, ParseTypeError};

use serde::Serialize;
use std::collections::BTreeMap;

/// A validated analysis target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    /// Display name from the config entry.
    pub name: String,

    /// Ecosystem resolved from the entry's `type` tag.
    #[serde(rename = "type")]
    pub module_type: ModuleType,

    /// What the analyzer should build (manifest, build file or directory).
    pub build_target: String,

    /// Directory the analyzer runs in.
    pub dir: String,

    /// Ecosystem-specific options, passed through unchanged.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_yaml::Value>,
}
