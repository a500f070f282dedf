//! Default values for `ValidationConfig` fields.
//!
//! Each function doubles as a serde default so a partial YAML file fills
//! the missing fields with the same values as `ValidationConfig::default()`.

/// Minimum trimmed character count for a substantial deliverable.
pub const DEFAULT_MIN_OUTPUT_LENGTH: usize = 500;

/// Score at or above which a deliverable without critical issues passes.
pub const DEFAULT_PASS_THRESHOLD: f64 = 70.0;

/// Score deduction per critical issue.
pub const DEFAULT_CRITICAL_PENALTY: f64 = 20.0;

/// Score deduction per warning.
pub const DEFAULT_WARNING_PENALTY: f64 = 5.0;

// Default value functions for serde
pub(crate) fn default_min_output_length() -> usize {
    DEFAULT_MIN_OUTPUT_LENGTH
}
pub(crate) fn default_pass_threshold() -> f64 {
    DEFAULT_PASS_THRESHOLD
}
pub(crate) fn default_critical_penalty() -> f64 {
    DEFAULT_CRITICAL_PENALTY
}
pub(crate) fn default_warning_penalty() -> f64 {
    DEFAULT_WARNING_PENALTY
}
pub(crate) fn default_structure_min_length() -> usize {
    300
}
pub(crate) fn default_vague_density_threshold() -> f64 {
    2.0
}
pub(crate) fn default_cost_min_length() -> usize {
    1000
}
pub(crate) fn default_min_depth_indicators() -> usize {
    2
}
pub(crate) fn default_true() -> bool {
    true
}
