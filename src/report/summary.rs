//! Human-readable rendering of a validation report.

use super::{Issue, Severity, ValidationReport};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

impl ValidationReport {
    /// Render the report as a multi-line text summary.
    ///
    /// Output format:
    /// ```text
    /// ============================================================
    /// QUALITY VALIDATION RESULTS
    /// ============================================================
    ///
    /// Status: FAILED
    /// Quality Score: 60.0/100 (threshold 70.0)
    ///
    /// Checks Passed: 5
    /// Critical Issues: 2
    /// Warnings: 0
    /// Info: 0
    ///
    /// CRITICAL ISSUES:
    ///   - [writer] completeness: Output too short (2 chars, minimum 500)
    ///     Fix: Provide a more detailed analysis and concrete recommendations
    /// ...
    /// ```
    pub fn summary(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let status = if self.is_valid() { "PASSED" } else { "FAILED" };

        let mut out = String::new();
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "QUALITY VALIDATION RESULTS");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out);
        let _ = writeln!(out, "Status: {}", status);
        let _ = writeln!(
            out,
            "Quality Score: {:.1}/100 (threshold {:.1})",
            self.score(),
            self.pass_threshold()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Checks Passed: {}", self.passed_checks().len());
        let _ = writeln!(out, "Critical Issues: {}", self.count(Severity::Critical));
        let _ = writeln!(out, "Warnings: {}", self.count(Severity::Warning));
        let _ = writeln!(out, "Info: {}", self.count(Severity::Info));

        write_section(&mut out, "CRITICAL ISSUES", &self.failed_checks());
        write_section(&mut out, "WARNINGS", &self.warnings());
        write_section(&mut out, "INFO", &self.info());

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule);
        out
    }

    /// Alias of [`ValidationReport::summary`].
    pub fn get_summary(&self) -> String {
        self.summary()
    }
}

fn write_section(out: &mut String, title: &str, issues: &[&Issue]) {
    if issues.is_empty() {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for issue in issues {
        let _ = writeln!(out, "  - {}: {}", issue.origin(), issue.message);
        if let Some(suggestion) = &issue.suggestion {
            let _ = writeln!(out, "    Fix: {}", suggestion);
        }
    }
}
