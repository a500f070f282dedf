use super::{Check, CheckContext};
use crate::report::Issue;
use crate::rules::RuleSet;
use crate::rules::tables::SECRET_REFERENCE_PREFIXES;
use std::ops::Range;

const NAME: &str = "security";

/// Flags credential-shaped values.
///
/// Every distinct match becomes its own issue. A value already reported by
/// an earlier pattern is not reported again, and values that reference a
/// secret (`$API_KEY`, `<token>`, `os.environ[...]`) are ignored. Forced on
/// in production mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityScan;

impl Check for SecurityScan {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self, ctx: &CheckContext<'_>) -> bool {
        ctx.config.security_enabled()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Vec<Issue> {
        credential_matches(ctx.text, ctx.rules)
            .into_iter()
            .map(|found| {
                Issue::critical(
                    NAME,
                    format!(
                        "Potential credential exposure ({}): {}",
                        found.id,
                        mask(&ctx.text[found.value])
                    ),
                )
                .with_suggestion(
                    "Remove hardcoded credentials and load them from environment variables or a secret manager",
                )
            })
            .collect()
    }
}

/// One reportable credential in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct CredentialMatch<'r> {
    pub id: &'r str,
    /// Byte range of the secret value.
    pub value: Range<usize>,
    /// Byte range of the whole match, label included.
    pub span: Range<usize>,
}

/// Credentials in `text`, in pattern order, one per distinct value.
pub(super) fn credential_matches<'r>(text: &str, rules: &'r RuleSet) -> Vec<CredentialMatch<'r>> {
    let mut found: Vec<CredentialMatch<'r>> = Vec::new();

    for pattern in rules.credentials() {
        for caps in pattern.regex.captures_iter(text) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.name("value").or_else(|| caps.get(0)))
            else {
                continue;
            };
            if value.as_str().is_empty()
                || is_reference(value.as_str())
                || is_prose(value.as_str(), &text[value.end()..])
            {
                continue;
            }

            let range = value.range();
            if found.iter().any(|f| overlaps(&f.value, &range)) {
                continue;
            }
            found.push(CredentialMatch {
                id: &pattern.id,
                value: range,
                span: whole.range(),
            });
        }
    }

    found
}

fn is_reference(value: &str) -> bool {
    let lower = value.to_lowercase();
    SECRET_REFERENCE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// A plain word followed by more words on the same line reads as a sentence
/// (`Password: use bcrypt`), not an assignment.
fn is_prose(value: &str, rest: &str) -> bool {
    if !value.chars().all(char::is_alphabetic) {
        return false;
    }
    let line = rest.split('\n').next().unwrap_or_default();
    let after = line.trim_start_matches([' ', '\t']);
    after.len() < line.len() && after.starts_with(char::is_alphabetic)
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Keep the first two characters, hide the rest.
fn mask(value: &str) -> String {
    if value.chars().count() <= 4 {
        return "****".to_string();
    }
    let visible: String = value.chars().take(2).collect();
    format!("{}****", visible)
}
