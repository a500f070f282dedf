//! Built-in rule tables.
//!
//! Pure data. Regex tables are compiled once by [`super::builtin`]; lexicons
//! are matched case-insensitively by the checks that use them.

/// A named regex in a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    /// Short identifier reported in issue messages.
    pub id: &'static str,
    /// Regex source (`regex` crate syntax).
    pub pattern: &'static str,
}

const fn rule(id: &'static str, pattern: &'static str) -> PatternRule {
    PatternRule { id, pattern }
}

/// Vague-language lexicon. Multi-word phrases come first so they win over
/// the single words they contain.
pub const VAGUE_TERMS: &[&str] = &[
    "may want to",
    "could consider",
    "might be good",
    "more or less",
    "to some extent",
    "sort of",
    "kind of",
    "maybe",
    "perhaps",
    "might",
    "possibly",
    "probably",
    "somewhat",
    "arguably",
];

/// Placeholder markers left in unfinished text.
pub const PLACEHOLDERS: &[PatternRule] = &[
    rule("todo", r"\bTODO\b"),
    rule("fixme", r"\bFIXME\b"),
    rule("xxx", r"\bXXX\b"),
    rule("tbd", r"\bTBD\b"),
    rule("your_value", r"(?i)\[YOUR_[^\]\n]*\]"),
    rule("placeholder_braces", r"(?i)\{[^{}\n]*PLACEHOLDER[^{}\n]*\}"),
    rule("insert_marker", r"(?i)<\s*INSERT[^<>\n]*>"),
    rule("placeholder_tag", r"(?i)<\s*placeholder\s*>"),
    rule("lorem_ipsum", r"(?i)\blorem\s+ipsum\b"),
];

/// Credential-shaped substrings. Rules with a `value` group report that
/// group; the others report the whole match. `assigned_secret` tolerates
/// markdown emphasis around the label (`**Password:** ...`) and only takes a
/// value that starts with a letter or digit.
pub const CREDENTIALS: &[PatternRule] = &[
    rule(
        "assigned_secret",
        r#"(?i)\b(?:api[_-]?key|apikey|password|passwd|pwd|secret|secret[_-]?key|client[_-]?secret|access[_-]?key|access[_-]?token|auth[_-]?token|token|private[_-]?key)\b[*_`]*\s*[=:][*_`]*\s*["'`]?(?P<value>[A-Za-z0-9][^"'`\s,;*]*)"#,
    ),
    rule("aws_access_key_id", r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b"),
    rule("sk_api_key", r"\bsk-(?:proj-|ant-)?[A-Za-z0-9_-]{20,}"),
    rule("github_token", r"\bgh[pousr]_[A-Za-z0-9]{36,}\b"),
    rule("slack_token", r"\bxox[abprs]-[A-Za-z0-9-]{10,}"),
    rule(
        "private_key_block",
        r"-----BEGIN (?:RSA |EC |DSA |OPENSSH |PGP )?PRIVATE KEY(?: BLOCK)?-----",
    ),
];

/// Value prefixes that reference a secret instead of spelling it out.
pub const SECRET_REFERENCE_PREFIXES: &[&str] = &["$", "<", "{", "%", "(", "os.environ", "process.env", "env("];

/// Cost and budget vocabulary.
pub const COST_KEYWORDS: &str =
    r"(?i)\b(?:costs?|pricing|prices?|budgets?|expenses?|rate[ -]limits?|billing|spend(?:ing)?)\b";

/// First-person deflections that signal a non-substantive answer.
pub const HALLUCINATION_MARKERS: &[PatternRule] = &[
    rule("as_an_ai", r"(?i)\bas an ai\b"),
    rule("language_model", r"(?i)\bas a (?:large )?language model\b"),
    rule("i_cannot", r"(?i)\bi cannot\b"),
    rule("apology", r"(?i)\bi apologi[sz]e\b[^.\n]*\bcannot\b"),
    rule("not_enough_info", r"(?i)\bi don['’]t have enough information\b"),
    rule("unable", r"(?i)\bi(?:['’]m| am) unable to\b"),
];

/// Markdown section headings: ATX (`## Title`) or setext (underlined).
pub const HEADINGS: &str = r"(?m)^ {0,3}#{1,6}[ \t]+\S|^ {0,3}\S[^\n]*\n {0,3}(?:=+|-+)[ \t]*$";

/// Numbered or bulleted list items; `body` is the item text.
pub const LIST_ITEMS: &str = r"(?m)^[ \t]*(?:\d+[.)]|[-*+•])[ \t]+(?P<body>\S[^\n]*)$";

/// Lines that announce explicit steps or recommendations.
pub const RECOMMENDATION_MARKERS: &str =
    r"(?im)^[ \t]*(?:#{1,6}[ \t]*)?(?:step[ \t]+\d+|recommendations?\b|action items?\b)";

/// Imperative verbs that open an actionable list item.
pub const RECOMMENDATION_VERBS: &[&str] = &[
    "add", "adopt", "apply", "avoid", "cache", "configure", "consider", "create", "define",
    "deploy", "disable", "document", "enable", "ensure", "implement", "install", "introduce",
    "limit", "migrate", "monitor", "move", "prefer", "remove", "replace", "restrict", "review",
    "rotate", "run", "schedule", "set", "split", "store", "switch", "test", "upgrade", "use",
    "validate",
];

/// Words that make any list item concrete.
pub const CONCRETE_MARKERS: &[&str] = &["should", "must", "recommend"];

/// Fenced code blocks (``` or ~~~).
pub const CODE_FENCES: &str = r"(?s)```.*?```|~~~.*?~~~";

/// Inline code spans with at least one non-blank character.
pub const INLINE_CODE: &str = r"`[^`\n]*[^`\s][^`\n]*`";

/// Phrases that indicate specific, explained guidance.
pub const DEPTH_INDICATORS: &[&str] = &[
    "specifically",
    "for example",
    "e.g.",
    "here's how",
    "step 1",
    "recommendation",
    "implementation",
    "```",
];

/// Role fragments that mark a producer as technical.
pub const TECHNICAL_ROLES: &[&str] = &[
    "engineer",
    "developer",
    "architect",
    "devops",
    "programmer",
    "sre",
    "technical",
];

/// Task-type fragments that mark a deliverable as technical.
pub const TECHNICAL_TASK_TYPES: &[&str] = &["code", "implementation", "technical", "engineering"];
