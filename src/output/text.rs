use std::fmt::Write;
use std::path::Path;

use crate::checker::{HeaderReport, LocEntry, LocReport, LocThresholds};

use super::ReportFormatter;

/// Normalize path separators for display so reports are stable across
/// platforms.
fn display_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Plain-text report for the header compliance check.
pub struct HeaderTextFormatter;

impl ReportFormatter for HeaderTextFormatter {
    type Report = HeaderReport;

    fn format(&self, report: &HeaderReport) -> String {
        if report.is_clean() {
            return "OK: All Rust files contain the required header.\n".to_string();
        }

        let mut out = String::from("ERROR: Missing required header in these files:\n");
        for path in &report.violations {
            let _ = writeln!(out, " - {}", display_path(path));
        }
        out
    }
}

/// Plain-text report for the line-count check. Thresholds are echoed in the
/// section headers.
pub struct LocTextFormatter {
    thresholds: LocThresholds,
}

impl LocTextFormatter {
    #[must_use]
    pub const fn new(thresholds: LocThresholds) -> Self {
        Self { thresholds }
    }

    fn write_entries(out: &mut String, entries: &[LocEntry]) {
        for entry in entries {
            let _ = writeln!(out, " - {}: {} LOC", display_path(&entry.path), entry.loc);
        }
    }
}

impl ReportFormatter for LocTextFormatter {
    type Report = LocReport;

    fn format(&self, report: &LocReport) -> String {
        let mut out = String::new();

        if !report.warnings.is_empty() {
            let _ = writeln!(
                out,
                "WARN: Files over {} LOC (excluding header/tests):",
                self.thresholds.warn
            );
            Self::write_entries(&mut out, &report.warnings);
        }

        if report.has_failures() {
            let _ = writeln!(
                out,
                "\nERROR: Files at or above {} LOC (excluding header/tests):",
                self.thresholds.fail
            );
            Self::write_entries(&mut out, &report.failures);
        } else {
            out.push_str("\nOK: LOC within limits.\n");
        }

        out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
