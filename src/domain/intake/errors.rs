//! Intake-specific error types.

use thiserror::Error;

use super::question::QuestionKey;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while building a question catalog.
///
/// These are startup-time configuration errors; the process should not
/// begin an interview after seeing one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Question catalog must contain at least one question")]
    Empty,

    #[error("Duplicate question key '{0}' in catalog")]
    DuplicateKey(QuestionKey),

    #[error("Invalid question definition: {0}")]
    InvalidQuestion(#[from] ValidationError),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Empty => ErrorCode::EmptyCatalog,
            CatalogError::DuplicateKey(_) => ErrorCode::DuplicateQuestionKey,
            CatalogError::InvalidQuestion(_) => ErrorCode::InvalidQuestion,
        }
    }
}

/// Errors raised by intake session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Operation not allowed in the current state.
    InvalidState(String),
    /// A completed intake was required.
    NotComplete { answered: usize, total: usize },
}

impl IntakeError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        IntakeError::InvalidState(message.into())
    }
    pub fn not_complete(answered: usize, total: usize) -> Self {
        IntakeError::NotComplete { answered, total }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            IntakeError::InvalidState(_) => ErrorCode::IntakeComplete,
            IntakeError::NotComplete { .. } => ErrorCode::IntakeNotComplete,
        }
    }
    pub fn message(&self) -> String {
        match self {
            IntakeError::InvalidState(msg) => format!("Invalid state: {}", msg),
            IntakeError::NotComplete { answered, total } => {
                format!("Intake not complete: {} of {} questions answered", answered, total)
            }
        }
    }
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for IntakeError {}
