use super::{Check, CheckContext};
use crate::report::Issue;

const NAME: &str = "completeness";

/// Flags text shorter than `min_output_length` characters (after trimming).
#[derive(Debug, Clone, Copy, Default)]
pub struct Completeness;

impl Check for Completeness {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        let length = ctx.char_count();
        let minimum = ctx.config.min_output_length;
        if length >= minimum {
            return Vec::new();
        }

        let message = if length == 0 {
            format!("Output is empty (minimum {} chars)", minimum)
        } else {
            format!("Output too short ({} chars, minimum {})", length, minimum)
        };

        vec![
            Issue::critical(NAME, message)
                .with_suggestion("Provide a more detailed analysis and concrete recommendations"),
        ]
    }
}
