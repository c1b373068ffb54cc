//! Manifest extraction for audit requests
//!
//! Derives the unique set of (name, declared version) pairs from a manifest
//! document containing `dependencies` and/or `devDependencies` groups.

use crate::domain::DependencySpec;
use crate::error::RequestError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Dependency groups examined in the manifest, in merge order
const DEPENDENCY_GROUPS: [&str; 2] = ["dependencies", "devDependencies"];

/// Extracts the set of dependency specs to audit from a manifest document
///
/// Both groups are merged into one mapping keyed by name; when a package
/// appears in both, the `devDependencies` version overrides the
/// `dependencies` version (last-write-wins, not an error). Version strings
/// are taken as-is with no syntax validation; entries whose version is not a
/// JSON string are skipped. Specs are returned in name order.
///
/// # Errors
///
/// Returns `RequestError::NoDependencies` when neither group is present or
/// both are empty.
pub fn extract_specs(document: &Value) -> Result<Vec<DependencySpec>, RequestError> {
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();

    for group in DEPENDENCY_GROUPS {
        if let Some(entries) = document.get(group).and_then(Value::as_object) {
            for (name, version) in entries {
                if let Some(version) = version.as_str() {
                    merged.insert(name, version);
                }
            }
        }
    }

    if merged.is_empty() {
        return Err(RequestError::NoDependencies);
    }

    Ok(merged
        .into_iter()
        .map(|(name, version)| DependencySpec::new(name, version))
        .collect())
}
