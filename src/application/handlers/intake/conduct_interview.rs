//! IntakeConversation - Turn-by-turn orchestration of one interview.
//!
//! Wraps an `IntakeSession` with the conversational pieces around it:
//! the "why we ask" rationale, an acknowledgement after every answer,
//! the progress meter, and the readiness outcome once the last answer lands.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::analysis::{
    ConsultantSummary, IntakeReport, ReadinessClassification, ReadinessScorer,
    ReadinessThresholds, SummaryFormat, SummaryGenerator,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::intake::{IntakeError, IntakeSession, ProgressSnapshot, QuestionCatalog};
use crate::ports::AcknowledgementSource;

/// Shown once every question has been answered.
pub const COMPLETION_MESSAGE: &str =
    "You’ve completed the intake. This summary will help professionals review your situation efficiently.";

/// A question as presented to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPrompt {
    /// One-based position in the catalog.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    /// "Why we ask this" text. May be empty.
    pub rationale: String,
}

/// Readiness result once the interview is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeOutcome {
    pub score: u32,
    pub max_score: u32,
    pub classification: ReadinessClassification,
    pub message: String,
    pub summary: ConsultantSummary,
    /// Summary rendered in the configured format.
    pub summary_text: String,
}

/// Everything the presentation layer shows after one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub acknowledgement: String,
    pub valid: bool,
    pub progress: ProgressSnapshot,
    /// Next question, or `None` once complete.
    pub next_question: Option<QuestionPrompt>,
    /// Present exactly when this answer completed the interview.
    pub outcome: Option<IntakeOutcome>,
}

/// Errors from a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// Blank input; nothing was submitted.
    EmptyAnswer,
    /// The session rejected the call.
    Intake(IntakeError),
}

impl ConversationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationError::EmptyAnswer => ErrorCode::EmptyField,
            ConversationError::Intake(err) => err.code(),
        }
    }
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationError::EmptyAnswer => write!(f, "Answer cannot be empty"),
            ConversationError::Intake(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConversationError {}

impl From<IntakeError> for ConversationError {
    fn from(err: IntakeError) -> Self {
        ConversationError::Intake(err)
    }
}

/// Drives one respondent through the catalog.
///
/// # Usage
///
/// ```rust,ignore
/// let mut conversation = IntakeConversation::new(catalog, acks, thresholds, SummaryFormat::Joined);
/// if let Some(question) = conversation.current_prompt() {
///     println!("{}", question.prompt);
/// }
/// let turn = conversation.respond("March 2021")?;
/// ```
pub struct IntakeConversation {
    session: IntakeSession,
    acknowledgements: Arc<dyn AcknowledgementSource>,
    thresholds: ReadinessThresholds,
    summary_format: SummaryFormat,
}

impl IntakeConversation {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        acknowledgements: Arc<dyn AcknowledgementSource>,
        thresholds: ReadinessThresholds,
        summary_format: SummaryFormat,
    ) -> Self {
        Self {
            session: IntakeSession::new(catalog),
            acknowledgements,
            thresholds,
            summary_format,
        }
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_prompt(&self) -> Option<QuestionPrompt> {
        let number = self.session.current_step() + 1;
        let total = self.session.catalog().len();
        self.session.current_question().map(|q| QuestionPrompt {
            number,
            total,
            prompt: q.prompt().to_string(),
            rationale: q.rationale().to_string(),
        })
    }

    /// Submits one answer.
    ///
    /// Surrounding whitespace is trimmed before submission.
    ///
    /// # Errors
    ///
    /// - `EmptyAnswer` if the text is blank (the session is untouched)
    /// - `Intake(InvalidState)` if the interview is already complete
    pub fn respond(&mut self, raw: &str) -> Result<ConversationTurn, ConversationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ConversationError::EmptyAnswer);
        }

        let submitted = self.session.submit_answer(text)?;
        let outcome = if submitted.status.is_complete() {
            let outcome = self.outcome();
            if let Some(o) = &outcome {
                info!(
                    session_id = %self.session.id(),
                    classification = %o.classification,
                    score = o.score,
                    "readiness classified"
                );
            }
            outcome
        } else {
            None
        };

        Ok(ConversationTurn {
            acknowledgement: self.acknowledgements.next_acknowledgement(),
            valid: submitted.valid,
            progress: self.session.progress(),
            next_question: self.current_prompt(),
            outcome,
        })
    }

    /// Readiness outcome, available only after the last answer.
    pub fn outcome(&self) -> Option<IntakeOutcome> {
        if !self.session.is_complete() {
            return None;
        }

        let classification = ReadinessScorer::classify(self.session.score(), &self.thresholds);
        let summary = SummaryGenerator::summarize(&self.session, classification);
        Some(IntakeOutcome {
            score: self.session.score(),
            max_score: self.session.max_score(),
            classification,
            message: ReadinessScorer::message(classification).to_string(),
            summary_text: summary.render(self.summary_format),
            summary,
        })
    }

    /// Frozen report for document export.
    ///
    /// # Errors
    ///
    /// - `NotComplete` if questions remain unanswered
    pub fn report(&self) -> Result<IntakeReport, IntakeError> {
        IntakeReport::from_session(&self.session, &self.thresholds, self.summary_format)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
