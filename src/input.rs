//! Entry point: normalize caller input and validate it.
//!
//! Callers hand over deliverables in different shapes: a single text, a
//! role → text mapping, or a JSON document produced by an orchestration
//! flow. [`ValidationInput`] is the one adapter that turns all of them into
//! a list of [`CandidateText`]s; [`quick_validate`] runs the engine over that
//! list and merges the results.

use crate::config::ValidationConfig;
use crate::engine::ValidationEngine;
use crate::error::{Result, VettedError};
use crate::report::ValidationReport;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The unit of validation: a deliverable plus optional metadata.
///
/// `role` and `task_type` only influence which checks apply (for example,
/// the code-example check runs for technical roles only). Unknown fields
/// are rejected when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CandidateText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    pub text: String,
}

impl CandidateText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            role: None,
            task_type: None,
            text: text.into(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }
}

/// Caller input in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationInput {
    /// One deliverable.
    Single(CandidateText),
    /// One deliverable per producer role, in validation order.
    Roles(Vec<CandidateText>),
}

/// Shapes accepted by [`ValidationInput::from_json`].
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Text(String),
    Record(CandidateText),
    Map(BTreeMap<String, String>),
    List(Vec<CandidateText>),
}

impl ValidationInput {
    /// Decode orchestration output.
    ///
    /// Accepts a JSON string (one deliverable), a single
    /// `{"role", "task_type", "text"}` record, an object mapping role to
    /// text, or an array of records. An object whose keys are all record
    /// fields and include `text` is read as a record.
    pub fn from_json(json: &str) -> Result<Self> {
        let decoded: JsonInput = serde_json::from_str(json).map_err(|e| {
            VettedError::Input(format!(
                "expected a string, a role -> text object, or an array of {{role, task_type, text}} records: {}",
                e
            ))
        })?;

        Ok(match decoded {
            JsonInput::Text(text) => ValidationInput::Single(CandidateText::new(text)),
            JsonInput::Record(candidate) => ValidationInput::Single(candidate),
            JsonInput::Map(map) => map.into(),
            JsonInput::List(list) => ValidationInput::Roles(list),
        })
    }

    /// Flatten into the candidates to validate.
    ///
    /// # Returns
    ///
    /// * `Err(VettedError::Config)` - A single text is empty, or a mapping has no entries
    pub fn into_candidates(self) -> Result<Vec<CandidateText>> {
        match self {
            ValidationInput::Single(candidate) => {
                if candidate.text.trim().is_empty() {
                    return Err(VettedError::Config(
                        "input text is empty; nothing to validate".to_string(),
                    ));
                }
                Ok(vec![candidate])
            }
            ValidationInput::Roles(candidates) => {
                if candidates.is_empty() {
                    return Err(VettedError::Config(
                        "input mapping is empty; provide at least one role and text".to_string(),
                    ));
                }
                Ok(candidates)
            }
        }
    }
}

impl From<&str> for ValidationInput {
    fn from(text: &str) -> Self {
        ValidationInput::Single(CandidateText::new(text))
    }
}

impl From<String> for ValidationInput {
    fn from(text: String) -> Self {
        ValidationInput::Single(CandidateText::new(text))
    }
}

impl From<CandidateText> for ValidationInput {
    fn from(candidate: CandidateText) -> Self {
        ValidationInput::Single(candidate)
    }
}

impl From<Vec<CandidateText>> for ValidationInput {
    fn from(candidates: Vec<CandidateText>) -> Self {
        ValidationInput::Roles(candidates)
    }
}

impl<R: Into<String>, T: Into<String>> From<Vec<(R, T)>> for ValidationInput {
    fn from(pairs: Vec<(R, T)>) -> Self {
        ValidationInput::Roles(
            pairs
                .into_iter()
                .map(|(role, text)| CandidateText::new(text).with_role(role))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for ValidationInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect::<Vec<_>>().into()
    }
}

impl From<HashMap<String, String>> for ValidationInput {
    /// Roles are sorted so the merged issue order is deterministic.
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}

/// Validate caller input with `config` and return one (possibly merged) report.
///
/// A single text yields that text's report. A mapping yields one run per
/// entry; the issue lists are concatenated and the union is re-scored, so
/// one failing role fails the whole input.
///
/// # Example
///
/// ```
/// use vetted::{ValidationConfig, quick_validate};
///
/// let report = quick_validate("ok", &ValidationConfig::default()).unwrap();
/// assert!(!report.is_valid());
/// assert_eq!(report.failed_checks()[0].check_name, "completeness");
/// ```
pub fn quick_validate(
    input: impl Into<ValidationInput>,
    config: &ValidationConfig,
) -> Result<ValidationReport> {
    let candidates = input.into().into_candidates()?;
    let engine = ValidationEngine::new(config.clone())?;

    tracing::debug!(candidates = candidates.len(), "validating input");
    Ok(engine.validate_all(&candidates))
}
