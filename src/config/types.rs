//! Constants and serde helpers used by the config model.

use serde::{Deserialize, Deserializer};

/// The only config schema version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// File names searched for when no `--config` path is given, in priority order.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = [".depscan.yml", ".depscan.yaml"];

/// Fetcher used when neither the config file nor the flags name one.
pub const DEFAULT_FETCHER: &str = "custom";

/// Deserialize a field, treating an explicit YAML `null` like a missing key.
///
/// `cli:` with nothing under it is a null, not an empty mapping, and users
/// write that often enough that it should not be a schema error.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
