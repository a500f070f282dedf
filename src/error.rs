//! Error types for vetted.
//!
//! Content problems in a deliverable are never errors: they surface as
//! [`Issue`](crate::report::Issue)s inside a report. The variants here cover
//! the cases where no report can be produced at all.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for vetted operations.
#[derive(Error, Debug)]
pub enum VettedError {
    /// Invalid configuration or empty input; the caller must fix the call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input could not be read or decoded (missing file, malformed JSON).
    #[error("input error: {0}")]
    Input(String),

    /// A built-in rule table failed to compile.
    #[error("rule table error: {0}")]
    Rules(String),
}

impl VettedError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VettedError::Config(_) => exit_codes::USER_ERROR,
            VettedError::Input(_) => exit_codes::USER_ERROR,
            VettedError::Rules(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for vetted operations.
pub type Result<T> = std::result::Result<T, VettedError>;
