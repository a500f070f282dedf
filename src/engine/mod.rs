//! Validation engine.
//!
//! The engine owns a validated configuration, the compiled rule set, and an
//! ordered list of checks. Validating a candidate text runs every enabled
//! check over the normalized text and its content view (placeholders and
//! credentials blanked), tags issues with the candidate's role, and scores
//! the result. The engine holds no mutable state, so one engine
//! can validate any number of texts from any number of threads.

pub mod scoring;


use crate::checks::{Check, CheckContext, builtin_checks, content_view};
use crate::config::ValidationConfig;
use crate::error::Result;
use crate::input::CandidateText;
use crate::report::{Issue, ValidationReport};
use crate::rules::RuleSet;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, debug_span, warn};

/// Runs the check pipeline over candidate texts.
pub struct ValidationEngine {
    config: ValidationConfig,
    rules: RuleSet,
    checks: Vec<Box<dyn Check>>,
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("config", &self.config)
            .field("checks", &self.check_names())
            .finish()
    }
}

/// Raw pipeline output for one candidate, before scoring.
#[derive(Debug, Default)]
struct PipelineOutcome {
    issues: Vec<Issue>,
    passed: Vec<String>,
    skipped: Vec<String>,
}

impl ValidationEngine {
    /// Create an engine with the built-in checks.
    ///
    /// # Returns
    ///
    /// * `Err(VettedError::Config)` - Invalid thresholds, penalties, or user patterns
    /// * `Err(VettedError::Rules)` - A built-in rule table failed to compile
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        let rules = RuleSet::from_config(&config)?;
        Ok(Self {
            config,
            rules,
            checks: builtin_checks(),
        })
    }

    /// Append a check to the end of the pipeline.
    pub fn with_check(mut self, check: Box<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Names of the checks in pipeline order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Validate a bare text with no role metadata.
    pub fn validate_text(&self, text: &str) -> ValidationReport {
        self.validate(&CandidateText::new(text))
    }

    /// Validate one candidate text.
    pub fn validate(&self, candidate: &CandidateText) -> ValidationReport {
        let outcome = self.run_pipeline(candidate);
        ValidationReport::new(outcome.issues, outcome.passed, outcome.skipped, &self.config)
    }

    /// Validate each candidate and merge the results into one report.
    ///
    /// The merged score is computed over the union of all issues.
    pub fn validate_all(&self, candidates: &[CandidateText]) -> ValidationReport {
        let reports = candidates.iter().map(|c| self.validate(c)).collect();
        ValidationReport::merge(reports, &self.config)
    }

    fn run_pipeline(&self, candidate: &CandidateText) -> PipelineOutcome {
        let text = normalize(&candidate.text);
        let content = content_view(&text, &self.rules);
        let ctx = CheckContext {
            text: &text,
            content: &content,
            role: candidate.role.as_deref(),
            task_type: candidate.task_type.as_deref(),
            config: &self.config,
            rules: &self.rules,
        };

        let span = debug_span!("validate", role = ctx.role.unwrap_or("-"));
        let _enter = span.enter();

        let mut outcome = PipelineOutcome::default();

        for check in &self.checks {
            let name = check.name();
            if !check.is_enabled(&ctx) {
                debug!(check = name, "check skipped");
                outcome.skipped.push(label(ctx.role, name));
                continue;
            }

            let found = run_isolated(check.as_ref(), &ctx);
            debug!(check = name, issues = found.len(), "check finished");

            if found.is_empty() {
                outcome.passed.push(label(ctx.role, name));
                continue;
            }

            outcome
                .issues
                .extend(found.into_iter().map(|issue| tag_role(issue, ctx.role)));
        }

        outcome
    }
}

/// Run one check, converting a panic into an info issue named after it.
fn run_isolated(check: &dyn Check, ctx: &CheckContext<'_>) -> Vec<Issue> {
    match panic::catch_unwind(AssertUnwindSafe(|| check.run(ctx))) {
        Ok(issues) => issues,
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            warn!(check = check.name(), reason = %reason, "check panicked");
            vec![
                Issue::info(
                    check.name(),
                    format!("check '{}' failed to run: {}", check.name(), reason),
                )
                .with_suggestion("The remaining checks still ran; report this failure to the rule maintainers"),
            ]
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Unify line endings and drop a leading byte-order mark.
fn normalize(text: &str) -> String {
    text.trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn label(role: Option<&str>, check: &str) -> String {
    match role {
        Some(role) => format!("{}: {}", role, check),
        None => check.to_string(),
    }
}

fn tag_role(issue: Issue, role: Option<&str>) -> Issue {
    match role {
        Some(role) if issue.role.is_none() => issue.with_role(role),
        _ => issue,
    }
}
