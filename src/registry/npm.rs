//! npm registry client
//!
//! Fetches deprecation notices and latest versions from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}
//!
//! Deprecation reflects the `deprecated` field of the version the `latest`
//! dist-tag points at, which is what `npm info <pkg> deprecated` reports.

use crate::error::LookupError;
use crate::registry::{HttpClient, RegistryClient};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Dist-tag naming the latest published version
const LATEST_TAG: &str = "latest";

/// npm registry client
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package metadata response (packument)
#[derive(Debug, Deserialize)]
struct PackumentResponse {
    /// Dist-tag to version mapping
    #[serde(rename = "dist-tags")]
    dist_tags: HashMap<String, String>,
    /// Per-version metadata
    #[serde(default)]
    versions: HashMap<String, VersionMetadata>,
}

/// Per-version metadata, reduced to the fields the audit needs
#[derive(Debug, Deserialize)]
struct VersionMetadata {
    #[serde(default)]
    deprecated: Option<DeprecationNotice>,
}

/// The `deprecated` field is normally a message string, but a bare boolean
/// appears in some older packuments
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeprecationNotice {
    Message(String),
    Flag(bool),
}

impl DeprecationNotice {
    /// Returns the notice as a non-empty message, the way `npm info` prints it
    fn message(&self) -> Option<String> {
        match self {
            DeprecationNotice::Message(m) if !m.is_empty() => Some(m.clone()),
            DeprecationNotice::Flag(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

impl NpmRegistry {
    /// Create a new npm registry client
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create a client against a custom base URL (mirrors, tests)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the metadata URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    /// Fetch the packument for a package
    async fn fetch_packument(&self, package: &str) -> Result<PackumentResponse, LookupError> {
        let url = self.build_url(package);
        self.client
            .get_json(&url, package, self.registry_name())
            .await
    }

    /// Resolve the version the `latest` dist-tag points at
    fn latest_version<'a>(
        &self,
        packument: &'a PackumentResponse,
        package: &str,
    ) -> Result<&'a String, LookupError> {
        packument.dist_tags.get(LATEST_TAG).ok_or_else(|| {
            LookupError::invalid_response(
                package,
                self.registry_name(),
                "missing dist-tags.latest",
            )
        })
    }
}

#[async_trait]
impl RegistryClient for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn lookup_deprecation(&self, package: &str) -> Result<Option<String>, LookupError> {
        let packument = self.fetch_packument(package).await?;
        let latest = self.latest_version(&packument, package)?;

        Ok(packument
            .versions
            .get(latest)
            .and_then(|metadata| metadata.deprecated.as_ref())
            .and_then(DeprecationNotice::message))
    }

    async fn lookup_latest_version(&self, package: &str) -> Result<String, LookupError> {
        let packument = self.fetch_packument(package).await?;
        self.latest_version(&packument, package).cloned()
    }
}
