//! Compiled rule tables.

use super::tables::{self, PatternRule};
use crate::config::ValidationConfig;
use crate::error::{Result, VettedError};
use regex::Regex;
use std::sync::LazyLock;

/// A compiled regex paired with the identifier it reports under.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub id: String,
    pub regex: Regex,
}

impl CompiledPattern {
    fn from_rule(table: &str, rule: &PatternRule) -> std::result::Result<Self, String> {
        Ok(Self {
            id: rule.id.to_string(),
            regex: compile(table, rule.pattern)?,
        })
    }
}

/// The built-in tables, compiled.
#[derive(Debug)]
pub struct CompiledRules {
    pub vague_terms: Regex,
    pub placeholders: Vec<CompiledPattern>,
    pub credentials: Vec<CompiledPattern>,
    pub cost_keywords: Regex,
    pub hallucination_markers: Vec<CompiledPattern>,
    pub headings: Regex,
    pub list_items: Regex,
    pub recommendation_markers: Regex,
    pub code_fences: Regex,
    pub inline_code: Regex,
}

impl CompiledRules {
    fn compile() -> std::result::Result<Self, String> {
        Ok(Self {
            vague_terms: compile("vague_terms", &lexicon_pattern(tables::VAGUE_TERMS))?,
            placeholders: compile_rules("placeholders", tables::PLACEHOLDERS)?,
            credentials: compile_rules("credentials", tables::CREDENTIALS)?,
            cost_keywords: compile("cost_keywords", tables::COST_KEYWORDS)?,
            hallucination_markers: compile_rules(
                "hallucination_markers",
                tables::HALLUCINATION_MARKERS,
            )?,
            headings: compile("headings", tables::HEADINGS)?,
            list_items: compile("list_items", tables::LIST_ITEMS)?,
            recommendation_markers: compile(
                "recommendation_markers",
                tables::RECOMMENDATION_MARKERS,
            )?,
            code_fences: compile("code_fences", tables::CODE_FENCES)?,
            inline_code: compile("inline_code", tables::INLINE_CODE)?,
        })
    }
}

static BUILTIN: LazyLock<std::result::Result<CompiledRules, String>> =
    LazyLock::new(CompiledRules::compile);

/// The process-wide compiled built-in tables.
///
/// Compiled on first use and shared read-only afterwards.
pub fn builtin() -> Result<&'static CompiledRules> {
    match &*BUILTIN {
        Ok(rules) => Ok(rules),
        Err(message) => Err(VettedError::Rules(message.clone())),
    }
}

/// Built-in tables plus the extra patterns a configuration adds.
///
/// Create once per engine; cheap to share across threads.
#[derive(Debug)]
pub struct RuleSet {
    builtin: &'static CompiledRules,
    extra_placeholders: Vec<CompiledPattern>,
    extra_credentials: Vec<CompiledPattern>,
}

impl RuleSet {
    /// Compile the extra patterns from config on top of the built-in tables.
    ///
    /// # Returns
    ///
    /// * `Err(VettedError::Config)` - A user pattern fails to compile
    /// * `Err(VettedError::Rules)` - A built-in table fails to compile
    pub fn from_config(config: &ValidationConfig) -> Result<Self> {
        Ok(Self {
            builtin: builtin()?,
            extra_placeholders: compile_user_patterns(
                "extra_placeholder_patterns",
                &config.extra_placeholder_patterns,
            )?,
            extra_credentials: compile_user_patterns(
                "extra_credential_patterns",
                &config.extra_credential_patterns,
            )?,
        })
    }

    pub fn builtin(&self) -> &CompiledRules {
        self.builtin
    }

    /// Built-in placeholder patterns followed by the configured extras.
    pub fn placeholders(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.builtin.placeholders.iter().chain(&self.extra_placeholders)
    }

    /// Built-in credential patterns followed by the configured extras.
    pub fn credentials(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.builtin.credentials.iter().chain(&self.extra_credentials)
    }
}

fn compile(table: &str, pattern: &str) -> std::result::Result<Regex, String> {
    Regex::new(pattern)
        .map_err(|e| format!("invalid pattern in table '{}': '{}' - {}", table, pattern, e))
}

fn compile_rules(
    table: &str,
    rules: &[PatternRule],
) -> std::result::Result<Vec<CompiledPattern>, String> {
    rules
        .iter()
        .map(|rule| CompiledPattern::from_rule(table, rule))
        .collect()
}

fn compile_user_patterns(field: &str, patterns: &[String]) -> Result<Vec<CompiledPattern>> {
    patterns
        .iter()
        .map(|pattern| {
            let regex = Regex::new(pattern).map_err(|e| {
                VettedError::Config(format!(
                    "invalid regex pattern in {}: '{}' - {}\n\
                     Fix: correct or remove this pattern in the config file.",
                    field, pattern, e
                ))
            })?;
            Ok(CompiledPattern {
                id: pattern.clone(),
                regex,
            })
        })
        .collect()
}

/// Build a case-insensitive whole-word alternation from a lexicon.
///
/// Terms keep their order, so earlier (longer) phrases win at the same
/// position. Spaces inside a phrase match any run of whitespace.
pub(crate) fn lexicon_pattern(terms: &[&str]) -> String {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b(?:{})\b", alternation)
}
