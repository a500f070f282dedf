use super::{Check, CheckContext};
use crate::report::Issue;

const NAME: &str = "code_examples";

/// Requires a fenced block or inline code span from technical producers.
///
/// Skipped unless `require_code_examples` is set and the role or task type
/// is technical.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeExamples;

impl Check for CodeExamples {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.require_code_examples && ctx.is_technical()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        let rules = ctx.rules.builtin();
        if rules.code_fences.is_match(ctx.content) || rules.inline_code.is_match(ctx.content) {
            return Vec::new();
        }

        vec![
            Issue::warning(NAME, "No code examples found in technical output")
                .with_suggestion("Include code snippets to demonstrate recommended approaches"),
        ]
    }
}
