//! Rule tables for vetted.
//!
//! Every lexical rule the checks apply lives here as versioned, immutable
//! data: vague-language terms, placeholder markers, credential shapes, cost
//! keywords, hallucination markers, and the structural patterns used to spot
//! headings, lists, and code. Check logic never embeds its own patterns.
//!
//! Regex tables are compiled once per process (see [`builtin`]) and are safe
//! to read from any number of threads.

mod compiled;
pub mod tables;


pub use compiled::{CompiledPattern, CompiledRules, RuleSet, builtin};

/// Version of the built-in rule tables. Bump on any table change.
pub const RULES_VERSION: &str = "1.0.0";

/// A built-in table, for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: &'static str,
    pub entries: Vec<&'static str>,
}

/// All built-in tables in a stable order.
pub fn list_tables() -> Vec<TableInfo> {
    fn patterns(rules: &[tables::PatternRule]) -> Vec<&'static str> {
        rules.iter().map(|r| r.pattern).collect()
    }

    vec![
        TableInfo {
            name: "vague_terms",
            entries: tables::VAGUE_TERMS.to_vec(),
        },
        TableInfo {
            name: "placeholders",
            entries: patterns(tables::PLACEHOLDERS),
        },
        TableInfo {
            name: "credentials",
            entries: patterns(tables::CREDENTIALS),
        },
        TableInfo {
            name: "cost_keywords",
            entries: vec![tables::COST_KEYWORDS],
        },
        TableInfo {
            name: "hallucination_markers",
            entries: patterns(tables::HALLUCINATION_MARKERS),
        },
        TableInfo {
            name: "recommendation_verbs",
            entries: tables::RECOMMENDATION_VERBS.to_vec(),
        },
        TableInfo {
            name: "depth_indicators",
            entries: tables::DEPTH_INDICATORS.to_vec(),
        },
        TableInfo {
            name: "technical_roles",
            entries: tables::TECHNICAL_ROLES.to_vec(),
        },
        TableInfo {
            name: "technical_task_types",
            entries: tables::TECHNICAL_TASK_TYPES.to_vec(),
        },
    ]
}
