//! Aggregated audit report types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which facets an audit run checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditMode {
    /// Only check for deprecation notices
    DeprecatedOnly,
    /// Check deprecation notices and latest published versions
    #[default]
    Full,
}

impl AuditMode {
    /// Returns true if latest-version lookups should be performed
    pub fn checks_outdated(&self) -> bool {
        matches!(self, AuditMode::Full)
    }
}

/// Final aggregate of one audit run
///
/// Immutable after construction. Field names match the wire contract of the
/// `checkDeprecated` endpoint; the outdated fields are omitted entirely in
/// deprecation-only mode rather than serialized as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of packages whose deprecation lookup completed
    pub total_checked: usize,
    /// Number of packages carrying a deprecation notice
    pub total_deprecated: usize,
    /// Number of packages behind the registry's latest version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_outdated: Option<usize>,
    /// Package name mapped to its deprecation notice
    pub deprecated_packages: BTreeMap<String, String>,
    /// Package name mapped to the latest version found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated_packages: Option<BTreeMap<String, String>>,
}

impl AuditReport {
    /// Returns true if no deprecated packages were found
    pub fn is_clean(&self) -> bool {
        self.total_deprecated == 0
    }

    /// Number of packages behind latest, zero in deprecation-only mode
    pub fn outdated_count(&self) -> usize {
        self.total_outdated.unwrap_or(0)
    }
}
