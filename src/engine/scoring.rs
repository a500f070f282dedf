//! Score and validity policy.
//!
//! Start at 100, subtract a fixed penalty per critical issue and per warning,
//! clamp to `[0, 100]`. Info issues are free. Penalties are multiplied by
//! counts, so the result does not depend on issue order.

use crate::config::ValidationConfig;
use crate::report::{Issue, Severity};

/// Score deduction for one issue of `severity`.
pub fn penalty(severity: Severity, config: &ValidationConfig) -> f64 {
    match severity {
        Severity::Critical => config.critical_penalty,
        Severity::Warning => config.warning_penalty,
        Severity::Info => 0.0,
    }
}

/// Quality score in `[0, 100]`.
pub fn score(issues: &[Issue], config: &ValidationConfig) -> f64 {
    let critical = count(issues, Severity::Critical) as f64;
    let warnings = count(issues, Severity::Warning) as f64;
    let raw = 100.0
        - critical * penalty(Severity::Critical, config)
        - warnings * penalty(Severity::Warning, config);

    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 100.0) }
}

/// No critical issues and the score meets the pass threshold.
pub fn is_valid(issues: &[Issue], score: f64, config: &ValidationConfig) -> bool {
    count(issues, Severity::Critical) == 0 && score >= config.pass_threshold
}

fn count(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}
