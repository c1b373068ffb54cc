//! Dependency specification structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single (name, declared version) pair submitted for auditing
///
/// Names are unique within one audit run; the manifest extractor is
/// responsible for merging duplicate entries before specs reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    /// Package name as it appears in the manifest
    pub name: String,
    /// Version string exactly as declared, including any range prefix
    pub declared_version: String,
}

impl DependencySpec {
    /// Creates a new dependency specification
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
        }
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.declared_version)
    }
}
