use super::{Check, CheckContext};
use crate::report::Issue;
use crate::rules::tables::DEPTH_INDICATORS;

const NAME: &str = "technical_depth";

/// Counts distinct depth indicators ("for example", "specifically", code
/// fences, ...) and warns when fewer than `min_depth_indicators` appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalDepth;

impl Check for TechnicalDepth {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.check_technical_depth
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        let lower = ctx.content.to_lowercase().replace('’', "'");
        let found = DEPTH_INDICATORS
            .iter()
            .filter(|indicator| lower.contains(*indicator))
            .count();
        let required = ctx.config.min_depth_indicators;
        if found >= required {
            return Vec::new();
        }

        vec![
            Issue::warning(
                NAME,
                format!(
                    "Output may lack technical depth ({} of {} depth indicators)",
                    found, required
                ),
            )
            .with_suggestion("Include specific examples, code snippets, or step-by-step explanations"),
        ]
    }
}
