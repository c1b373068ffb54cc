//! Registry clients for fetching package deprecation and version information
//!
//! This module provides:
//! - HTTP client shared foundation
//! - The RegistryClient capability trait
//! - npm registry implementation

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};

use crate::error::LookupError;
use async_trait::async_trait;

/// Abstract capability to query one package's registry state
///
/// Each method performs exactly one attempt; callers own any continue-on-error
/// policy. Failure is a per-call outcome, never fatal to the caller.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name for error context
    fn registry_name(&self) -> &'static str;

    /// Fetch the deprecation notice for a package's latest published version
    ///
    /// Returns `Ok(None)` when the package exists but is not deprecated
    /// (a clean miss, as opposed to a failed lookup).
    async fn lookup_deprecation(&self, package: &str) -> Result<Option<String>, LookupError>;

    /// Fetch the latest published version string for a package
    async fn lookup_latest_version(&self, package: &str) -> Result<String, LookupError>;
}
