use super::{Check, CheckContext};
use crate::report::Issue;
use crate::rules::CompiledRules;
use crate::rules::tables::{CONCRETE_MARKERS, RECOMMENDATION_VERBS};

const NAME: &str = "recommendations";

/// Requires at least one concrete, actionable recommendation.
///
/// Accepted forms:
/// - a numbered or bulleted item that opens with an imperative verb
///   (`1. Use a read-through cache`)
/// - a list item carrying a concrete marker: a number, inline code, or
///   `should` / `must` / `recommend`
/// - a line announcing steps or recommendations (`Step 1`, `## Recommendations`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommendations;

impl Check for Recommendations {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.require_specific_recommendations
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        if has_recommendation(ctx.content, ctx.rules.builtin()) {
            return Vec::new();
        }

        vec![
            Issue::critical(NAME, "Output lacks specific, actionable recommendations")
                .with_suggestion("Provide clear, numbered recommendations or action items"),
        ]
    }
}

fn has_recommendation(text: &str, rules: &CompiledRules) -> bool {
    if rules.recommendation_markers.is_match(text) {
        return true;
    }

    rules
        .list_items
        .captures_iter(text)
        .filter_map(|caps| caps.name("body"))
        .any(|body| is_actionable(body.as_str()))
}

fn is_actionable(item: &str) -> bool {
    let item = item.trim_start_matches(['*', '_', '[', '(']);

    let first_word: String = item
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if RECOMMENDATION_VERBS.contains(&first_word.as_str()) {
        return true;
    }

    if item.chars().any(|c| c.is_ascii_digit() || c == '`') {
        return true;
    }

    let lower = item.to_lowercase();
    CONCRETE_MARKERS.iter().any(|marker| lower.contains(marker))
}
