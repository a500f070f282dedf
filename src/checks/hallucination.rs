use super::{Check, CheckContext, excerpt};
use crate::report::Issue;

const NAME: &str = "hallucination";

/// Flags first-person disclaimers ("As an AI", "I cannot") that usually
/// replace a substantive answer. One issue per marker that matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hallucination;

impl Check for Hallucination {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        ctx.rules
            .builtin()
            .hallucination_markers
            .iter()
            .filter_map(|marker| {
                let mut matches = marker.regex.find_iter(ctx.content);
                let first = matches.next()?;
                let occurrences = 1 + matches.count();
                Some(
                    Issue::warning(
                        NAME,
                        format!(
                            "Found disclaimer '{}' ({} occurrence(s))",
                            excerpt(first.as_str(), 50),
                            occurrences
                        ),
                    )
                    .with_suggestion("Replace deflections with a substantive answer or state the missing input explicitly"),
                )
            })
            .collect()
    }
}
