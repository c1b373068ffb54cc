//! depaudit - npm dependency deprecation and freshness audit library
//!
//! This library provides the core functionality for auditing a manifest's
//! declared dependencies against the npm registry:
//! - Manifest extraction (dependencies / devDependencies merge)
//! - Registry lookups for deprecation notices and latest versions
//! - Continue-on-error audit aggregation into a single report

pub mod audit;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
pub mod service;
