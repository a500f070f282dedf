use super::{Check, CheckContext};
use crate::report::Issue;

const NAME: &str = "structure";

/// Flags document-length text with no markdown section headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structure;

impl Check for Structure {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        // Short answers are not expected to have sections.
        if ctx.char_count() < ctx.config.structure_min_length {
            return Vec::new();
        }

        if ctx.rules.builtin().headings.is_match(ctx.content) {
            return Vec::new();
        }

        vec![
            Issue::warning(NAME, "Output lacks clear structure (no headings or sections)")
                .with_suggestion("Use markdown headers to organize content into clear sections"),
        ]
    }
}
