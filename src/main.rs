//! depaudit - npm dependency deprecation and freshness audit CLI
//!
//! Reads a package.json (or manifest JSON on stdin), queries the npm registry
//! per declared dependency, and prints the aggregated audit report.

use anyhow::Context;
use clap::Parser;
use depaudit::audit::{AuditConfig, AuditEngine};
use depaudit::cli::CliArgs;
use depaudit::output::{create_formatter, OutputConfig};
use depaudit::progress::Progress;
use depaudit::registry::{HttpClient, NpmRegistry};
use depaudit::service::AuditService;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depaudit v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Registry: {}", args.registry);
        if args.deprecated_only {
            eprintln!("Mode: deprecated-only");
        }
    }

    let body = read_manifest(&args)?;

    let client = HttpClient::new()?;
    let registry = NpmRegistry::with_base_url(client, &args.registry);
    let config = AuditConfig {
        mode: args.mode(),
        concurrency: args.concurrency,
        budget: args.timeout,
    };
    let service = AuditService::new(AuditEngine::new(Arc::new(registry), config));

    let mut progress = Progress::new(!args.quiet);
    let report = match service
        .check_deprecated_with_progress(&body, &mut progress)
        .await
    {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, args.quiet));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    // Deprecated findings get a distinct exit code for CI pipelines
    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

/// Read the manifest JSON from stdin or the resolved file path
fn read_manifest(args: &CliArgs) -> anyhow::Result<String> {
    if args.stdin {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("failed to read manifest from stdin")?;
        Ok(body)
    } else {
        let path = args.manifest_path();
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read manifest file {}", path.display()))
    }
}
