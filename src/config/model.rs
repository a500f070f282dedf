//! ValidationConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for one validation call.
///
/// This is an immutable value: build it once (in code, from YAML, or via
/// [`ValidationConfig::production`]) and pass it to the engine. There is no
/// process-wide default that call sites mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    // =========================================================================
    // Gate settings
    // =========================================================================
    /// Minimum trimmed character count (default: 500).
    #[serde(default = "default_min_output_length")]
    pub min_output_length: usize,

    /// Require a code example from technical roles.
    #[serde(default = "default_true")]
    pub require_code_examples: bool,

    /// Require at least one concrete, actionable recommendation.
    #[serde(default = "default_true")]
    pub require_specific_recommendations: bool,

    /// Flag placeholder markers such as `TODO` or `[YOUR_API_KEY]`.
    #[serde(default = "default_true")]
    pub check_for_placeholders: bool,

    /// Stricter profile: forces security, cost, and placeholder checks.
    #[serde(default)]
    pub production_mode: bool,

    /// Score at or above which a deliverable without critical issues passes.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    // =========================================================================
    // Scoring
    // =========================================================================
    /// Deduction per critical issue.
    #[serde(default = "default_critical_penalty")]
    pub critical_penalty: f64,

    /// Deduction per warning.
    #[serde(default = "default_warning_penalty")]
    pub warning_penalty: f64,

    // =========================================================================
    // Check tuning
    // =========================================================================
    /// Trimmed length from which missing section headers are flagged.
    #[serde(default = "default_structure_min_length")]
    pub structure_min_length: usize,

    /// Vague terms per 100 words above which the specificity check fires.
    #[serde(default = "default_vague_density_threshold")]
    pub vague_density_threshold: f64,

    /// Trimmed length above which missing cost keywords are flagged.
    #[serde(default = "default_cost_min_length")]
    pub cost_min_length: usize,

    /// Scan for credentials outside production mode.
    #[serde(default)]
    pub scan_for_credentials: bool,

    /// Report missing cost considerations outside production mode (as info).
    #[serde(default = "default_true")]
    pub check_cost_awareness: bool,

    /// Flag deliverables with too few technical-depth indicators.
    #[serde(default = "default_true")]
    pub check_technical_depth: bool,

    /// Minimum number of distinct technical-depth indicators.
    #[serde(default = "default_min_depth_indicators")]
    pub min_depth_indicators: usize,

    // =========================================================================
    // Extra rule patterns
    // =========================================================================
    /// Additional placeholder regexes appended to the built-in table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_placeholder_patterns: Vec<String>,

    /// Additional credential regexes appended to the built-in table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_credential_patterns: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_output_length: default_min_output_length(),
            require_code_examples: default_true(),
            require_specific_recommendations: default_true(),
            check_for_placeholders: default_true(),
            production_mode: false,
            pass_threshold: default_pass_threshold(),
            critical_penalty: default_critical_penalty(),
            warning_penalty: default_warning_penalty(),
            structure_min_length: default_structure_min_length(),
            vague_density_threshold: default_vague_density_threshold(),
            cost_min_length: default_cost_min_length(),
            scan_for_credentials: false,
            check_cost_awareness: default_true(),
            check_technical_depth: default_true(),
            min_depth_indicators: default_min_depth_indicators(),
            extra_placeholder_patterns: Vec::new(),
            extra_credential_patterns: Vec::new(),
        }
    }
}
