//! IntakeSession aggregate - one respondent's walk through the catalog.
//!
//! All mutation goes through [`IntakeSession::submit_answer`]. Each call
//! stores exactly one answer and advances exactly one step, whether or not
//! the answer passed its validator.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::catalog::QuestionCatalog;
use super::errors::IntakeError;
use super::progress::ProgressSnapshot;
use super::question::{QuestionDefinition, QuestionKey};
use crate::domain::foundation::{IntakeStatus, SessionId, StateMachine, Timestamp};

/// One stored answer, kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub key: QuestionKey,
    pub text: String,
    pub valid: bool,
}

/// Result of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the answer passed its question's validator.
    pub valid: bool,
    /// Score added by this answer (the question weight, or zero).
    pub awarded: u32,
    /// Status after the submission.
    pub status: IntakeStatus,
}

/// Intake session state machine.
///
/// # Invariants
///
/// - `current_step` is in `[0, catalog.len()]`
/// - `answers.len() == current_step`
/// - `score` never decreases and never exceeds `catalog.total_weight()`
/// - `status` is `Complete` exactly when `current_step == catalog.len()`
#[derive(Debug, Clone)]
pub struct IntakeSession {
    id: SessionId,
    catalog: Arc<QuestionCatalog>,
    current_step: usize,
    answers: Vec<Answer>,
    score: u32,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl IntakeSession {
    /// Starts a fresh session at step zero.
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self::with_id(SessionId::new(), catalog)
    }

    pub fn with_id(id: SessionId, catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            id,
            answers: Vec::with_capacity(catalog.len()),
            catalog,
            current_step: 0,
            score: 0,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score this session could reach.
    pub fn max_score(&self) -> u32 {
        self.catalog.total_weight()
    }

    /// Answers in the order they were given.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Raw answer text stored under a key, if that question was reached.
    pub fn answer_for(&self, key: &QuestionKey) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| &a.key == key)
            .map(|a| a.text.as_str())
    }

    pub fn status(&self) -> IntakeStatus {
        IntakeStatus::for_step(self.current_step, self.catalog.len())
    }

    pub fn is_complete(&self) -> bool {
        self.status().is_complete()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Question to ask next, or `None` once complete.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        self.catalog.get(self.current_step)
    }

    /// `current_step / catalog.len()`, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        self.progress().fraction
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.current_step, self.catalog.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer for the current question and advances one step.
    ///
    /// The text is stored verbatim. A failed validation is not an error:
    /// the answer is kept, earns nothing, and the interview moves on.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is already complete (nothing changes)
    pub fn submit_answer(
        &mut self,
        raw_answer: impl Into<String>,
    ) -> Result<SubmitOutcome, IntakeError> {
        let status = self.status();
        if !status.accepts_answers() {
            return Err(IntakeError::invalid_state(format!(
                "intake already complete after {} answers",
                self.current_step
            )));
        }

        let next_status = status
            .transition_to(IntakeStatus::for_step(self.current_step + 1, self.catalog.len()))
            .map_err(|e| IntakeError::invalid_state(e.to_string()))?;

        let question = self
            .catalog
            .get(self.current_step)
            .ok_or_else(|| IntakeError::invalid_state("no question at current step"))?;

        let raw_answer = raw_answer.into();
        let valid = question.accepts(&raw_answer);
        let awarded = if valid { question.weight() } else { 0 };
        let key = question.key().clone();

        debug!(
            session_id = %self.id,
            step = self.current_step,
            key = %key,
            validator = question.validator().map_or("none", |v| v.name()),
            valid,
            awarded,
            "answer submitted"
        );

        self.score += awarded;
        self.answers.push(Answer {
            key,
            text: raw_answer,
            valid,
        });
        self.current_step += 1;

        if next_status.is_complete() {
            self.completed_at = Some(Timestamp::now());
            info!(
                session_id = %self.id,
                score = self.score,
                max_score = self.max_score(),
                "intake complete"
            );
        }

        Ok(SubmitOutcome {
            valid,
            awarded,
            status: next_status,
        })
    }
}
