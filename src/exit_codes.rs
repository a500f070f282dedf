//! Exit code constants for the vetted CLI.
//!
//! - 0: Every deliverable passed the gate
//! - 1: User error (bad args, invalid config, unreadable input)
//! - 2: Validation failure (the gate rejected at least one deliverable)
//! - 3: Internal error (a built-in rule table is broken)

/// All deliverables passed.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or unreadable input.
pub const USER_ERROR: i32 = 1;

/// Validation failure: critical issues found or score below threshold.
pub const VALIDATION_FAILURE: i32 = 2;

/// Internal error: the built-in rule tables failed to compile.
pub const INTERNAL_ERROR: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, INTERNAL_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn validation_failure_is_not_success() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(VALIDATION_FAILURE, 2);
    }
}
