//! vetted: a deterministic quality gate for agent-produced deliverables.
//!
//! The engine scores free text against a fixed set of rule-based checks
//! (completeness, structure, specificity, actionable recommendations, code
//! examples, placeholders, credentials, cost awareness, disclaimers, depth)
//! and returns a severity-classified [`ValidationReport`] with a score and a
//! pass/fail verdict. No model is consulted and nothing is rewritten: the
//! same text and configuration always produce the same report.
//!
//! ```
//! use vetted::{CandidateText, ValidationConfig, ValidationEngine};
//!
//! let engine = ValidationEngine::new(ValidationConfig::production())?;
//! let report = engine.validate(&CandidateText::new("password: hunter2").with_role("writer"));
//!
//! assert!(!report.is_valid());
//! assert!(report.failed_checks().iter().any(|i| i.check_name == "security"));
//! # Ok::<(), vetted::VettedError>(())
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod report;
pub mod rules;

pub use checks::{Check, CheckContext};
pub use config::ValidationConfig;
pub use engine::ValidationEngine;
pub use error::{Result, VettedError};
pub use input::{CandidateText, ValidationInput, quick_validate};
pub use report::{Issue, Severity, ValidationReport};
