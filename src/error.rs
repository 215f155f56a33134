//! Error types for the depscan CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::module::ParseTypeError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a config document can be rejected.
///
/// Every variant is terminal for the load that produced it; no partially
/// loaded config is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The bytes are not a YAML mapping.
    #[error("failed to parse config YAML: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// `version` is missing, not an integer, or not the supported version.
    #[error("config file version is not 1")]
    WrongVersion,

    /// Valid YAML, but a field holds a value of the wrong type.
    #[error("invalid config structure: {0}")]
    Schema(#[source] serde_yaml::Error),

    /// A module entry names an ecosystem that is not supported.
    #[error("could not parse module type {tag} for module '{module}': {source}")]
    UnknownModuleType {
        module: String,
        tag: String,
        source: ParseTypeError,
    },

    /// The config file could not be read.
    #[error("failed to read config file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Main error type for depscan operations.
#[derive(Error, Debug)]
pub enum DepscanError {
    /// The config file was found but could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Serialization(String),
}

impl DepscanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DepscanError::Config(ConfigError::Io { .. }) => exit_codes::USER_ERROR,
            DepscanError::Config(_) => exit_codes::CONFIG_ERROR,
            DepscanError::UserError(_) => exit_codes::USER_ERROR,
            DepscanError::Serialization(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for depscan operations.
pub type Result<T> = std::result::Result<T, DepscanError>;
