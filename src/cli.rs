//! CLI argument parsing module for depaudit

use crate::domain::AuditMode;
use crate::registry::NPM_REGISTRY_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given as a whole number of seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty timeout string".to_string());
    }

    let secs: u64 = s
        .parse()
        .map_err(|_| format!("invalid timeout in seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(Duration::from_secs(secs))
}

/// npm dependency deprecation and freshness audit
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depaudit",
    version,
    about = "Audit npm dependencies for deprecation notices and newer versions"
)]
pub struct CliArgs {
    /// Path to package.json or a directory containing it
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Read the manifest JSON from standard input instead of a file
    #[arg(long)]
    pub stdin: bool,

    // Audit options
    /// Only check for deprecation notices, skip latest-version lookups
    #[arg(long)]
    pub deprecated_only: bool,

    /// Maximum number of concurrent registry lookups
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Overall audit budget in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "300")]
    pub timeout: Duration,

    /// Registry base URL
    #[arg(long, default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    // Output options
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// The audit mode selected by the flags
    pub fn mode(&self) -> AuditMode {
        if self.deprecated_only {
            AuditMode::DeprecatedOnly
        } else {
            AuditMode::Full
        }
    }

    /// Resolve the manifest file to read
    ///
    /// A directory path means the package.json inside it.
    pub fn manifest_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join("package.json")
        } else {
            self.path.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["depaudit"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.stdin);
        assert!(!args.deprecated_only);
        assert_eq!(args.concurrency, 10);
        assert_eq!(args.timeout, Duration::from_secs(300));
        assert_eq!(args.registry, NPM_REGISTRY_URL);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["depaudit", "/some/path/package.json"]);
        assert_eq!(args.path, PathBuf::from("/some/path/package.json"));
    }

    #[test]
    fn test_stdin_flag() {
        let args = CliArgs::parse_from(["depaudit", "--stdin"]);
        assert!(args.stdin);
    }

    #[test]
    fn test_mode_default_is_full() {
        let args = CliArgs::parse_from(["depaudit"]);
        assert_eq!(args.mode(), AuditMode::Full);
    }

    #[test]
    fn test_deprecated_only_mode() {
        let args = CliArgs::parse_from(["depaudit", "--deprecated-only"]);
        assert_eq!(args.mode(), AuditMode::DeprecatedOnly);
    }

    #[test]
    fn test_concurrency_flag() {
        let args = CliArgs::parse_from(["depaudit", "--concurrency", "4"]);
        assert_eq!(args.concurrency, 4);
    }

    #[test]
    fn test_timeout_flag() {
        let args = CliArgs::parse_from(["depaudit", "--timeout", "30"]);
        assert_eq!(args.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_registry_override() {
        let args = CliArgs::parse_from(["depaudit", "--registry", "http://localhost:4873"]);
        assert_eq!(args.registry, "http://localhost:4873");
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["depaudit", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["depaudit", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_json_output() {
        let args = CliArgs::parse_from(["depaudit", "--json"]);
        assert!(args.json);
    }

    #[test]
    fn test_manifest_path_for_file() {
        let args = CliArgs::parse_from(["depaudit", "/nonexistent/package.json"]);
        assert_eq!(
            args.manifest_path(),
            PathBuf::from("/nonexistent/package.json")
        );
    }

    #[test]
    fn test_manifest_path_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs::parse_from(["depaudit", dir.path().to_str().unwrap()]);
        assert_eq!(args.manifest_path(), dir.path().join("package.json"));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("300").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_timeout("1").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_timeout(" 60 ").unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-5").is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "depaudit",
            "/path/to/project",
            "--deprecated-only",
            "--concurrency",
            "2",
            "--timeout",
            "60",
            "--json",
            "--quiet",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/project"));
        assert!(args.deprecated_only);
        assert_eq!(args.concurrency, 2);
        assert_eq!(args.timeout, Duration::from_secs(60));
        assert!(args.json);
        assert!(args.quiet);
    }
}
