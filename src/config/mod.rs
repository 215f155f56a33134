//! Configuration model for depscan.
//!
//! This module defines the Config struct that represents `.depscan.yml`.
//! Loading is version gated (only schema version 1 is accepted), tolerant of
//! unknown and missing optional fields, and all-or-nothing: every entry under
//! `analyze.modules` must name a supported ecosystem or the whole load fails.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{AnalyzeProperties, CliProperties, Config, ModuleProperties};
pub use operations::discover;
