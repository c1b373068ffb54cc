//! Audit engine coordinating per-package registry lookups
//!
//! This module provides:
//! - Per-package lookup tasks producing `Result<PackageVerdict, LookupError>`
//! - Continue-on-error accumulation: one package's failure never aborts a run
//! - Bounded concurrency with order-independent aggregation
//! - An overall per-run budget; packages unfinished at the deadline are
//!   treated as failed lookups rather than erroring the report

use crate::domain::{AuditMode, AuditReport, DependencySpec, PackageVerdict};
use crate::error::LookupError;
use crate::progress::Progress;
use crate::registry::RegistryClient;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;

/// Default concurrency limit for registry lookups
const DEFAULT_CONCURRENCY: usize = 10;

/// Default overall budget for one audit run (300 seconds)
const DEFAULT_BUDGET: Duration = Duration::from_secs(300);

/// Configuration for an audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Which facets to check
    pub mode: AuditMode,
    /// Maximum concurrent registry lookups
    pub concurrency: usize,
    /// Overall wall-clock budget for the run
    pub budget: Duration,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            mode: AuditMode::default(),
            concurrency: DEFAULT_CONCURRENCY,
            budget: DEFAULT_BUDGET,
        }
    }
}

/// Mutable audit state accumulated during a run
///
/// The only shared mutable resource within a run; tasks fold their outcomes
/// into it under a mutex, so aggregates are identical regardless of dispatch
/// order. Maps are keyed by name, making the fold commutative over packages.
#[derive(Debug, Clone, Default)]
struct AuditState {
    checked: usize,
    deprecated: BTreeMap<String, String>,
    outdated: BTreeMap<String, String>,
}

impl AuditState {
    /// Folds one package outcome into the accumulated state
    ///
    /// A package counts as checked once its deprecation lookup completed,
    /// whether or not it found a notice; a hard lookup failure contributes
    /// nothing at all.
    fn absorb(&mut self, outcome: Result<PackageVerdict, LookupError>) {
        let Ok(verdict) = outcome else {
            return;
        };

        self.checked += 1;
        if let Some(message) = verdict.deprecation_message() {
            self.deprecated.insert(verdict.name.clone(), message.to_string());
        }
        if let Some(latest) = verdict.outdated_to() {
            self.outdated.insert(verdict.name.clone(), latest.to_string());
        }
    }
}

/// Assembles the final report from accumulated audit state
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    mode: AuditMode,
}

impl ReportBuilder {
    /// Create a builder for the given audit mode
    pub fn new(mode: AuditMode) -> Self {
        Self { mode }
    }

    /// Build the immutable report; totals derive from the map sizes
    pub fn build(
        &self,
        total_checked: usize,
        deprecated_packages: BTreeMap<String, String>,
        outdated_packages: BTreeMap<String, String>,
    ) -> AuditReport {
        let (total_outdated, outdated_packages) = if self.mode.checks_outdated() {
            (Some(outdated_packages.len()), Some(outdated_packages))
        } else {
            (None, None)
        };

        AuditReport {
            total_checked,
            total_deprecated: deprecated_packages.len(),
            total_outdated,
            deprecated_packages,
            outdated_packages,
        }
    }
}

/// Engine driving registry lookups for a set of dependency specs
pub struct AuditEngine {
    registry: Arc<dyn RegistryClient>,
    config: AuditConfig,
}

impl AuditEngine {
    /// Create a new engine over the given registry client
    pub fn new(registry: Arc<dyn RegistryClient>, config: AuditConfig) -> Self {
        Self { registry, config }
    }

    /// The mode this engine audits in
    pub fn mode(&self) -> AuditMode {
        self.config.mode
    }

    /// Run one audit over the given specs
    pub async fn run(&self, specs: Vec<DependencySpec>) -> AuditReport {
        self.run_with_progress(specs, &Progress::disabled()).await
    }

    /// Run one audit, ticking the progress reporter per completed package
    pub async fn run_with_progress(
        &self,
        specs: Vec<DependencySpec>,
        progress: &Progress,
    ) -> AuditReport {
        let state = Arc::new(Mutex::new(AuditState::default()));
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let deadline = tokio::time::Instant::now() + self.config.budget;

        let mut tasks = JoinSet::new();
        for spec in specs {
            let registry = Arc::clone(&self.registry);
            let state = Arc::clone(&state);
            let semaphore = Arc::clone(&semaphore);
            let mode = self.config.mode;
            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                let outcome = audit_package(registry.as_ref(), &spec, mode).await;
                state.lock().await.absorb(outcome);
            });
        }

        loop {
            match tokio::time::timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(_)) => progress.inc(),
                Ok(None) => break,
                Err(_) => {
                    // Budget exhausted: unfinished packages become failed
                    // lookups and the report reflects what completed in time.
                    tasks.abort_all();
                    break;
                }
            }
        }

        let state = state.lock().await.clone();
        ReportBuilder::new(self.config.mode).build(state.checked, state.deprecated, state.outdated)
    }
}

/// Performs the lookups for a single package and classifies the result
///
/// The deprecation lookup decides whether the package was checked at all; a
/// latest-version failure only leaves that facet absent from the verdict.
async fn audit_package(
    registry: &dyn RegistryClient,
    spec: &DependencySpec,
    mode: AuditMode,
) -> Result<PackageVerdict, LookupError> {
    let deprecation = registry.lookup_deprecation(&spec.name).await?;

    let latest_version = if mode.checks_outdated() {
        registry.lookup_latest_version(&spec.name).await.ok()
    } else {
        None
    };

    Ok(PackageVerdict {
        name: spec.name.clone(),
        declared_version: spec.declared_version.clone(),
        deprecation,
        latest_version,
    })
}
