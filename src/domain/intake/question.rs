//! Question definitions - one entry in the intake catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::validator::Validator;
use crate::domain::foundation::ValidationError;

/// Identifier under which an answer is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionKey(String);

impl QuestionKey {
    /// Creates a key, rejecting empty or whitespace-only text.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("question_key"));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest weight a single question may carry.
pub const MAX_QUESTION_WEIGHT: u32 = 1_000;

/// An immutable question in the rubric.
///
/// # Invariants
///
/// - `prompt` is non-empty
/// - `weight` is between 1 and `MAX_QUESTION_WEIGHT`
#[derive(Debug, Clone)]
pub struct QuestionDefinition {
    key: QuestionKey,
    prompt: String,
    rationale: String,
    weight: u32,
    validator: Option<Arc<dyn Validator>>,
}

impl QuestionDefinition {
    /// Creates a question that accepts any answer.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the key or prompt is blank
    /// - `OutOfRange` if the weight is zero or above `MAX_QUESTION_WEIGHT`
    pub fn new(
        key: impl Into<String>,
        prompt: impl Into<String>,
        rationale: impl Into<String>,
        weight: u32,
    ) -> Result<Self, ValidationError> {
        let key = QuestionKey::new(key)?;
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if weight == 0 || weight > MAX_QUESTION_WEIGHT {
            let actual = i32::try_from(weight).unwrap_or(i32::MAX);
            return Err(ValidationError::out_of_range(
                "weight",
                1,
                MAX_QUESTION_WEIGHT as i32,
                actual,
            ));
        }

        Ok(Self {
            key,
            prompt,
            rationale: rationale.into(),
            weight,
            validator: None,
        })
    }

    /// Attaches a validator; answers failing it earn no score.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn key(&self) -> &QuestionKey {
        &self.key
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Why the question is asked, shown alongside the prompt.
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn validator(&self) -> Option<&dyn Validator> {
        self.validator.as_deref()
    }

    /// Runs the validator, treating a missing one as always valid.
    pub fn accepts(&self, answer: &str) -> bool {
        self.validator
            .as_ref()
            .map_or(true, |validator| validator.validate(answer))
    }
}
