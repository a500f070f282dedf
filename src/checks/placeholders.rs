use super::{Check, CheckContext, excerpt};
use crate::report::Issue;

const NAME: &str = "placeholders";

/// Flags unfinished markers such as `TODO` or `[YOUR_API_KEY]`.
///
/// Emits one issue per placeholder pattern that matched. Forced on in
/// production mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholders;

impl Check for Placeholders {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.placeholders_enabled()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();

        for pattern in ctx.rules.placeholders() {
            let mut matches = pattern.regex.find_iter(ctx.text);
            let Some(first) = matches.next() else {
                continue;
            };
            let occurrences = 1 + matches.count();

            issues.push(
                Issue::critical(
                    NAME,
                    format!(
                        "Found placeholder '{}' ({}, {} occurrence(s))",
                        excerpt(first.as_str(), 50),
                        pattern.id,
                        occurrences
                    ),
                )
                .with_suggestion("Replace placeholders with specific, concrete content"),
            );
        }

        issues
    }
}
