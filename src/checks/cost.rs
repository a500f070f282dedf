use super::{Check, CheckContext};
use crate::report::{Issue, Severity};

const NAME: &str = "cost_awareness";

/// Flags long deliverables that never mention cost, pricing, or budget.
///
/// Reported as info by default; production mode forces the check on and
/// escalates it to a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostAwareness;

impl Check for CostAwareness {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.cost_enabled()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        if ctx.char_count() <= ctx.config.cost_min_length {
            return Vec::new();
        }

        if ctx.rules.builtin().cost_keywords.is_match(ctx.content) {
            return Vec::new();
        }

        let severity = if ctx.config.production_mode {
            Severity::Warning
        } else {
            Severity::Info
        };

        vec![
            Issue::new(NAME, severity, "No cost or budget considerations mentioned")
                .with_suggestion("Include estimated costs for API calls, infrastructure, and rate limits"),
        ]
    }
}
