//! JSON output formatter matching the wire contract

use crate::domain::AuditReport;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
///
/// The serialized report is exactly the `checkDeprecated` response body.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_output_matches_wire_contract() {
        let mut deprecated = BTreeMap::new();
        deprecated.insert("left-pad".to_string(), "use String.padStart".to_string());
        let report = AuditReport {
            total_checked: 1,
            total_deprecated: 1,
            total_outdated: Some(0),
            deprecated_packages: deprecated,
            outdated_packages: Some(BTreeMap::new()),
        };

        let mut buffer = Vec::new();
        JsonFormatter::new().format(&report, &mut buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(parsed["total_checked"], 1);
        assert_eq!(parsed["total_deprecated"], 1);
        assert_eq!(parsed["total_outdated"], 0);
        assert_eq!(parsed["deprecated_packages"]["left-pad"], "use String.padStart");
        assert_eq!(parsed["outdated_packages"], serde_json::json!({}));
    }

    #[test]
    fn test_json_output_ends_with_newline() {
        let report = AuditReport {
            total_checked: 0,
            total_deprecated: 0,
            total_outdated: None,
            deprecated_packages: BTreeMap::new(),
            outdated_packages: None,
        };
        let mut buffer = Vec::new();
        JsonFormatter::new().format(&report, &mut buffer).unwrap();
        assert!(buffer.ends_with(b"\n"));
    }
}
