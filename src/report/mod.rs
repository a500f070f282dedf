//! Validation reports.
//!
//! A [`ValidationReport`] is the outcome of one validation run (or of several
//! merged runs). It is built once from the issues the checks produced and
//! never changes afterwards; the severity views and the text summary are
//! projections of the same issue list.

mod summary;
mod types;


pub use types::{Issue, Severity};

use crate::config::ValidationConfig;
use crate::engine::scoring;
use serde::Serialize;

/// Result of validating one or more candidate texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
    passed_checks: Vec<String>,
    skipped_checks: Vec<String>,
    score: f64,
    is_valid: bool,
    pass_threshold: f64,
}

impl ValidationReport {
    /// Build a report, scoring `issues` under `config`.
    pub fn new(
        issues: Vec<Issue>,
        passed_checks: Vec<String>,
        skipped_checks: Vec<String>,
        config: &ValidationConfig,
    ) -> Self {
        let score = scoring::score(&issues, config);
        let is_valid = scoring::is_valid(&issues, score, config);
        Self {
            issues,
            passed_checks,
            skipped_checks,
            score,
            is_valid,
            pass_threshold: config.pass_threshold,
        }
    }

    /// Merge several reports into one.
    ///
    /// Issues and check names are concatenated in order, then the union is
    /// re-scored with the same deduction rule. Scores are never averaged, so
    /// a single severe failure is not masked by other good deliverables.
    pub fn merge(reports: Vec<ValidationReport>, config: &ValidationConfig) -> Self {
        let mut issues = Vec::new();
        let mut passed_checks = Vec::new();
        let mut skipped_checks = Vec::new();

        for report in reports {
            issues.extend(report.issues);
            passed_checks.extend(report.passed_checks);
            skipped_checks.extend(report.skipped_checks);
        }

        Self::new(issues, passed_checks, skipped_checks, config)
    }

    /// Every issue, in check execution order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Names of checks that ran and produced no issues.
    pub fn passed_checks(&self) -> &[String] {
        &self.passed_checks
    }

    /// Names of checks that were gated off by configuration or metadata.
    pub fn skipped_checks(&self) -> &[String] {
        &self.skipped_checks
    }

    /// Critical issues.
    pub fn failed_checks(&self) -> Vec<&Issue> {
        self.with_severity(Severity::Critical)
    }

    pub fn warnings(&self) -> Vec<&Issue> {
        self.with_severity(Severity::Warning)
    }

    pub fn info(&self) -> Vec<&Issue> {
        self.with_severity(Severity::Info)
    }

    /// Quality score in `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// True iff there are no critical issues and the score meets the threshold.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }

    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    fn with_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }
}
