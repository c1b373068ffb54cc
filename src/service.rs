//! Audit service implementing the request/response contract
//!
//! This is the `checkDeprecated` endpoint minus the HTTP plumbing: a host can
//! mount `check_deprecated` behind a POST route and `health_check` behind a
//! GET route and serialize what comes back. Only request-shape errors
//! propagate; per-package lookup failures are absorbed into the report.

use crate::audit::AuditEngine;
use crate::domain::AuditReport;
use crate::error::RequestError;
use crate::manifest::extract_specs;
use crate::progress::Progress;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health check response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Fixed status line
    pub status: String,
}

/// Returns the health check response; no audit logic is invoked
pub fn health_check() -> HealthStatus {
    HealthStatus {
        status: "Server is running".to_string(),
    }
}

/// Request/response front for the audit engine
pub struct AuditService {
    engine: AuditEngine,
}

impl AuditService {
    /// Create a service around a configured engine
    pub fn new(engine: AuditEngine) -> Self {
        Self { engine }
    }

    /// Audit the manifest in a raw JSON request body
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidRequest` when the body is not a JSON
    /// object, and `RequestError::NoDependencies` when no dependency group
    /// is present; both map to a 400 response at the host boundary.
    pub async fn check_deprecated(&self, body: &str) -> Result<AuditReport, RequestError> {
        self.check_deprecated_with_progress(body, &mut Progress::disabled())
            .await
    }

    /// Audit a request body while reporting per-package progress
    pub async fn check_deprecated_with_progress(
        &self,
        body: &str,
        progress: &mut Progress,
    ) -> Result<AuditReport, RequestError> {
        let document: Value = serde_json::from_str(body).map_err(|e| {
            RequestError::invalid_request(format!("request body is not valid JSON: {}", e))
        })?;

        if !document.is_object() {
            return Err(RequestError::invalid_request(
                "request body must be a JSON object",
            ));
        }

        let specs = extract_specs(&document)?;

        progress.start(specs.len() as u64, "Auditing packages");
        let report = self.engine.run_with_progress(specs, progress).await;
        progress.finish_and_clear();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditConfig;
    use crate::domain::AuditMode;
    use crate::error::LookupError;
    use crate::registry::RegistryClient;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Registry that reports every package as healthy and current
    struct QuietRegistry;

    #[async_trait]
    impl RegistryClient for QuietRegistry {
        fn registry_name(&self) -> &'static str {
            "quiet"
        }

        async fn lookup_deprecation(&self, _package: &str) -> Result<Option<String>, LookupError> {
            Ok(None)
        }

        async fn lookup_latest_version(&self, _package: &str) -> Result<String, LookupError> {
            Ok("1.0.0".to_string())
        }
    }

    fn service(mode: AuditMode) -> AuditService {
        let config = AuditConfig {
            mode,
            ..AuditConfig::default()
        };
        AuditService::new(AuditEngine::new(Arc::new(QuietRegistry), config))
    }

    #[test]
    fn test_health_check_body() {
        let status = health_check();
        assert_eq!(status.status, "Server is running");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "Server is running");
    }

    #[tokio::test]
    async fn test_check_deprecated_happy_path() {
        let body = r#"{"dependencies": {"lodash": "1.0.0"}}"#;
        let report = service(AuditMode::Full).check_deprecated(body).await.unwrap();
        assert_eq!(report.total_checked, 1);
        assert_eq!(report.total_deprecated, 0);
        assert_eq!(report.total_outdated, Some(0));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_rejected() {
        let err = service(AuditMode::Full)
            .check_deprecated("{not json")
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidRequest { .. }));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected() {
        for body in ["[]", "\"text\"", "42", "null"] {
            let err = service(AuditMode::Full)
                .check_deprecated(body)
                .await
                .unwrap_err();
            assert!(matches!(err, RequestError::InvalidRequest { .. }), "{}", body);
        }
    }

    #[tokio::test]
    async fn test_empty_object_reports_no_dependencies() {
        let err = service(AuditMode::Full)
            .check_deprecated("{}")
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::NoDependencies);
        assert_eq!(
            err.to_string(),
            "No dependencies or devDependencies found in the provided data"
        );
    }

    #[tokio::test]
    async fn test_deprecated_only_mode_shapes_response() {
        let body = r#"{"devDependencies": {"jest": "^29.0.0"}}"#;
        let report = service(AuditMode::DeprecatedOnly)
            .check_deprecated(body)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("total_outdated").is_none());
        assert!(json.get("outdated_packages").is_none());
    }
}
