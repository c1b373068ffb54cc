//! Core domain models for depaudit
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency specifications extracted from a manifest
//! - Per-package audit verdicts
//! - The aggregated audit report and audit mode

mod report;
mod spec;
mod verdict;

pub use report::{AuditMode, AuditReport};
pub use spec::DependencySpec;
pub use verdict::PackageVerdict;
