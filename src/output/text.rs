//! Text output formatter for human-readable display

use crate::domain::AuditReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal output
pub struct TextFormatter {
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return match report.total_outdated {
                Some(outdated) => writeln!(
                    writer,
                    "checked {} deprecated {} outdated {}",
                    report.total_checked, report.total_deprecated, outdated
                ),
                None => writeln!(
                    writer,
                    "checked {} deprecated {}",
                    report.total_checked, report.total_deprecated
                ),
            };
        }

        writeln!(writer, "Checked {} package(s)", report.total_checked)?;

        if report.deprecated_packages.is_empty() {
            writeln!(writer, "{}", "No deprecated packages found".green())?;
        } else {
            writeln!(
                writer,
                "{}",
                format!("Deprecated ({}):", report.total_deprecated).red().bold()
            )?;
            for (name, message) in &report.deprecated_packages {
                writeln!(writer, "  {} {}", name.red(), message)?;
            }
        }

        if let Some(outdated) = &report.outdated_packages {
            if outdated.is_empty() {
                if self.verbosity == Verbosity::Verbose {
                    writeln!(writer, "{}", "All packages are at their latest version".green())?;
                }
            } else {
                writeln!(
                    writer,
                    "{}",
                    format!("Outdated ({}):", report.outdated_count()).yellow().bold()
                )?;
                for (name, latest) in outdated {
                    writeln!(writer, "  {} latest is {}", name.yellow(), latest)?;
                }
            }
        }

        Ok(())
    }
}
