//! Per-package audit verdict

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the registry lookups for a single package
///
/// Produced once per submitted spec. An absent facet means the lookup for that
/// facet did not succeed or was not attempted (deprecation-only mode never
/// attempts the latest-version lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVerdict {
    /// Package name
    pub name: String,
    /// Version string as declared in the manifest
    pub declared_version: String,
    /// Deprecation notice from the registry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    /// Latest published version reported by the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

impl PackageVerdict {
    /// Creates a verdict with no registry findings
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            deprecation: None,
            latest_version: None,
        }
    }

    /// Sets the deprecation notice (builder pattern)
    pub fn with_deprecation(mut self, message: impl Into<String>) -> Self {
        self.deprecation = Some(message.into());
        self
    }

    /// Sets the latest published version (builder pattern)
    pub fn with_latest_version(mut self, version: impl Into<String>) -> Self {
        self.latest_version = Some(version.into());
        self
    }

    /// Returns the deprecation notice if it is non-empty
    pub fn deprecation_message(&self) -> Option<&str> {
        self.deprecation.as_deref().filter(|m| !m.is_empty())
    }

    /// Returns the latest version when it differs from the declared version
    ///
    /// Comparison is byte-wise; no semver normalization is performed, so a
    /// declared `^1.2.0` is outdated relative to a latest `1.2.0`.
    pub fn outdated_to(&self) -> Option<&str> {
        self.latest_version
            .as_deref()
            .filter(|latest| *latest != self.declared_version)
    }

    /// Returns true if the package carries a non-empty deprecation notice
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_message().is_some()
    }

    /// Returns true if the registry reports a different latest version
    pub fn is_outdated(&self) -> bool {
        self.outdated_to().is_some()
    }
}

impl fmt::Display for PackageVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.declared_version)?;
        if self.is_deprecated() {
            write!(f, " (deprecated)")?;
        }
        if let Some(latest) = self.outdated_to() {
            write!(f, " (latest: {})", latest)?;
        }
        Ok(())
    }
}
