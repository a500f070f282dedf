//! Severity and issue records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much an issue blocks use of the deliverable.
///
/// Variants are declared from least to most blocking so the derived `Ord`
/// gives `Critical > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Optional improvement; never affects the score.
    Info,
    /// Quality concern; lowers the score but does not block on its own.
    Warning,
    /// Blocks production use.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single flagged rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Name of the check that fired.
    pub check_name: String,
    /// Severity of the violation.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Actionable remediation, if the check has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Producer role of the candidate text this issue came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Issue {
    pub fn new(check_name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            severity,
            message: message.into(),
            suggestion: None,
            role: None,
        }
    }

    pub fn critical(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_name, Severity::Critical, message)
    }

    pub fn warning(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_name, Severity::Warning, message)
    }

    pub fn info(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_name, Severity::Info, message)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// `[role] check_name` or just `check_name`.
    pub fn origin(&self) -> String {
        match &self.role {
            Some(role) => format!("[{}] {}", role, self.check_name),
            None => self.check_name.clone(),
        }
    }
}
