use super::{Check, CheckContext};
use crate::report::Issue;

const NAME: &str = "specificity";

/// Flags text whose vague-language density exceeds the configured limit.
///
/// Density is vague terms per 100 whitespace-separated words.
#[derive(Debug, Clone, Copy, Default)]
pub struct Specificity;

impl Check for Specificity {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        let words = ctx.content.split_whitespace().count();
        if words == 0 {
            return Vec::new();
        }

        let vague = ctx.rules.builtin().vague_terms.find_iter(ctx.content).count();
        let density = vague as f64 * 100.0 / words as f64;
        let limit = ctx.config.vague_density_threshold;
        if density <= limit {
            return Vec::new();
        }

        vec![
            Issue::warning(
                NAME,
                format!(
                    "Output contains {} vague terms ({:.1} per 100 words, limit {:.1}) - lacks decisiveness",
                    vague, density, limit
                ),
            )
            .with_suggestion("Use definitive language and commit to specific recommendations"),
        ]
    }
}
