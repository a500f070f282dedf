//! Quality checks.
//!
//! Each check is an independent, stateless evaluator over one candidate
//! text. Checks never fail: empty or odd input is something to report on,
//! not an error condition. Which checks run is decided by configuration and
//! candidate metadata through [`Check::is_enabled`].
//!
//! Built-in checks, in pipeline order:
//! - `completeness`: text shorter than `min_output_length`
//! - `structure`: document-length text without section headings
//! - `specificity`: dense vague language
//! - `recommendations`: no concrete, actionable recommendation
//! - `code_examples`: technical deliverable without code
//! - `placeholders`: unfinished markers (`TODO`, `[YOUR_API_KEY]`, ...)
//! - `security`: credential-shaped values
//! - `cost_awareness`: long deliverable without cost considerations
//! - `hallucination`: first-person disclaimers
//! - `technical_depth`: too few depth indicators

mod code_examples;
mod completeness;
mod cost;
mod hallucination;
mod placeholders;
mod recommendations;
mod security;
mod specificity;
mod structure;
mod technical_depth;

#[cfg(test)]
mod tests;

pub use code_examples::CodeExamples;
pub use completeness::Completeness;
pub use cost::CostAwareness;
pub use hallucination::Hallucination;
pub use placeholders::Placeholders;
pub use recommendations::Recommendations;
pub use security::SecurityScan;
pub use specificity::Specificity;
pub use structure::Structure;
pub use technical_depth::TechnicalDepth;

use crate::config::ValidationConfig;
use crate::report::Issue;
use crate::rules::RuleSet;
use crate::rules::tables::{TECHNICAL_ROLES, TECHNICAL_TASK_TYPES};
use std::ops::Range;

/// Everything a check may look at for one candidate text.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Normalized text (`\n` line endings, no byte-order mark).
    pub text: &'a str,
    /// `text` with placeholder and credential matches blanked out. Every
    /// check except `placeholders` and `security` reads this view.
    pub content: &'a str,
    /// Producer role, if known.
    pub role: Option<&'a str>,
    /// Task type, if known.
    pub task_type: Option<&'a str>,
    pub config: &'a ValidationConfig,
    pub rules: &'a RuleSet,
}

impl<'a> CheckContext<'a> {
    /// Content view with surrounding whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.content.trim()
    }

    /// Length in characters after trimming.
    pub fn char_count(&self) -> usize {
        self.trimmed().chars().count()
    }

    /// Whether the role or task type marks this deliverable as technical.
    pub fn is_technical(&self) -> bool {
        self.role
            .is_some_and(|role| matches_fragment(role, TECHNICAL_ROLES))
            || self
                .task_type
                .is_some_and(|task| matches_fragment(task, TECHNICAL_TASK_TYPES))
    }
}

/// One rule evaluator in the validation pipeline.
///
/// Implementations must be pure: the same context always yields the same
/// issues. A panic inside [`Check::run`] is caught by the engine and
/// reported as an info issue instead of aborting the run.
pub trait Check: Send + Sync {
    /// Stable identifier used as `Issue::check_name`.
    fn name(&self) -> &str;

    /// Whether this check applies to the context. Disabled checks are
    /// reported as skipped.
    fn is_enabled(&self, _ctx: &CheckContext<'_>) -> bool {
        true
    }

    /// Evaluate the text, returning zero or more issues.
    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue>;
}

/// The built-in checks in pipeline order.
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(Completeness),
        Box::new(Structure),
        Box::new(Specificity),
        Box::new(Recommendations),
        Box::new(CodeExamples),
        Box::new(Placeholders),
        Box::new(SecurityScan),
        Box::new(CostAwareness),
        Box::new(Hallucination),
        Box::new(TechnicalDepth),
    ]
}

/// `text` with every placeholder match and reported credential replaced by a
/// single space.
pub fn content_view(text: &str, rules: &RuleSet) -> String {
    let mut spans: Vec<Range<usize>> = rules
        .placeholders()
        .flat_map(|pattern| pattern.regex.find_iter(text).map(|m| m.range()))
        .chain(
            security::credential_matches(text, rules)
                .into_iter()
                .map(|found| found.span),
        )
        .collect();
    if spans.is_empty() {
        return text.to_string();
    }
    spans.sort_by_key(|span| (span.start, span.end));

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.end <= cursor {
            continue;
        }
        let start = span.start.max(cursor);
        out.push_str(&text[cursor..start]);
        if start == span.start {
            out.push(' ');
        }
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Case-insensitive fragment match over the words of `value`.
///
/// Short fragments (three chars or fewer, e.g. `sre`) must equal a whole
/// word; longer ones may appear inside a word (`engineer` in `engineering`).
fn matches_fragment(value: &str, fragments: &[&str]) -> bool {
    let lower = value.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            fragments.iter().any(|fragment| {
                if fragment.len() <= 3 {
                    word == *fragment
                } else {
                    word.contains(fragment)
                }
            })
        })
}

/// First `max` characters of a match, for issue messages.
fn excerpt(text: &str, max: usize) -> String {
    let mut out: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        out.push_str("...");
    }
    out
}
