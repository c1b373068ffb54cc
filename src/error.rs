//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RequestError: Malformed audit requests, rejected before any lookup
//! - LookupError: Per-package registry failures, absorbed by the audit engine

use thiserror::Error;

/// Errors in the shape of an audit request
///
/// These are the only errors that propagate to the caller of the audit
/// service; everything that goes wrong per package is folded into the
/// report's completeness instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Request body is missing, not JSON, or not an object
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Neither dependency group is present or both are empty
    #[error("No dependencies or devDependencies found in the provided data")]
    NoDependencies,
}

/// Errors from a single registry lookup
///
/// One attempt per call, no retries. A lookup failure never fails the audit
/// run that issued it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    Network {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

impl RequestError {
    /// Creates a new InvalidRequest error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        RequestError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code a front end should respond with
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::InvalidRequest { .. } | RequestError::NoDependencies => 400,
        }
    }
}

impl LookupError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        LookupError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::Network {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        LookupError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}
