//! The closed set of package ecosystems depscan can analyze.
//!
//! Config files name an ecosystem with a free-form `type` tag. Each
//! ecosystem has a canonical name plus the aliases users tend to write
//! (package manager names, build tool names). Anything else is rejected.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported package ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Ant,
    Bower,
    Buck,
    Carthage,
    Cocoapods,
    Composer,
    Debian,
    Go,
    Gradle,
    Haskell,
    Maven,
    NodeJS,
    NuGet,
    OkBuck,
    Python,
    Raw,
    Ruby,
    Rust,
    Scala,
}

/// Returned when a `type` tag does not name any known ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module type: {tag}")]
pub struct ParseTypeError {
    /// The tag exactly as it was written.
    pub tag: String,
}

impl ModuleType {
    /// Every supported ecosystem, in canonical-name order.
    pub const ALL: [ModuleType; 19] = [
        ModuleType::Ant,
        ModuleType::Bower,
        ModuleType::Buck,
        ModuleType::Carthage,
        ModuleType::Cocoapods,
        ModuleType::Composer,
        ModuleType::Debian,
        ModuleType::Go,
        ModuleType::Gradle,
        ModuleType::Haskell,
        ModuleType::Maven,
        ModuleType::NodeJS,
        ModuleType::NuGet,
        ModuleType::OkBuck,
        ModuleType::Python,
        ModuleType::Raw,
        ModuleType::Ruby,
        ModuleType::Rust,
        ModuleType::Scala,
    ];

    /// Resolve a config `type` tag to an ecosystem.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(tag: &str) -> Result<Self, ParseTypeError> {
        Self::ALL
            .into_iter()
            .find(|t| t.tags().contains(&tag))
            .ok_or_else(|| ParseTypeError {
                tag: tag.to_string(),
            })
    }

    /// Canonical name, as printed and serialized.
    pub fn as_str(&self) -> &'static str {
        self.tags()[0]
    }

    /// All tags accepted for this ecosystem. The first entry is the canonical name.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            ModuleType::Ant => &["ant"],
            ModuleType::Bower => &["bower"],
            ModuleType::Buck => &["buck"],
            ModuleType::Carthage => &["carthage"],
            ModuleType::Cocoapods => &["cocoapods", "pod"],
            ModuleType::Composer => &["composer"],
            ModuleType::Debian => &["debian", "deb"],
            ModuleType::Go => &[
                "go", "golang", "dep", "glide", "godep", "govendor", "vndr", "gdm",
            ],
            ModuleType::Gradle => &["gradle"],
            ModuleType::Haskell => &["haskell", "cabal", "stack"],
            ModuleType::Maven => &["maven", "mvn"],
            ModuleType::NodeJS => &["nodejs", "npm", "commonjspackage"],
            ModuleType::NuGet => &["nuget"],
            ModuleType::OkBuck => &["okbuck"],
            ModuleType::Python => &["python", "pip"],
            ModuleType::Raw => &["raw", "vendoredarchives"],
            ModuleType::Ruby => &["ruby", "gem", "bundler"],
            ModuleType::Rust => &["rust", "cargo"],
            ModuleType::Scala => &["scala", "sbt"],
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
