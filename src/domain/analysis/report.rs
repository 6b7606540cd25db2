//! Intake report - frozen snapshot handed to document renderers.

use serde::Serialize;

use super::readiness::{ReadinessClassification, ReadinessScorer, ReadinessThresholds};
use super::summary::{ConsultantSummary, SummaryFormat, SummaryGenerator};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::intake::{IntakeError, IntakeSession};

/// Document title used by every export format.
pub const REPORT_TITLE: &str = "Immigration Intake Summary";

/// A question paired with the answer given to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    /// One-based position in the catalog.
    pub number: usize,
    pub prompt: String,
    pub answer: String,
    pub valid: bool,
}

/// Everything a renderer needs, computed once from a completed session.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeReport {
    pub session_id: SessionId,
    pub title: String,
    pub generated_at: Timestamp,
    pub score: u32,
    pub max_score: u32,
    pub classification: ReadinessClassification,
    pub message: String,
    pub summary: ConsultantSummary,
    pub summary_text: String,
    pub answers: Vec<AnsweredQuestion>,
}

impl IntakeReport {
    /// Builds the report for a completed session.
    ///
    /// # Errors
    ///
    /// - `NotComplete` if questions remain unanswered
    pub fn from_session(
        session: &IntakeSession,
        thresholds: &ReadinessThresholds,
        summary_format: SummaryFormat,
    ) -> Result<Self, IntakeError> {
        if !session.is_complete() {
            return Err(IntakeError::not_complete(
                session.current_step(),
                session.catalog().len(),
            ));
        }

        let classification = ReadinessScorer::classify(session.score(), thresholds);
        let summary = SummaryGenerator::summarize(session, classification);
        let summary_text = summary.render(summary_format);

        let answers = session
            .catalog()
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                session
                    .answers()
                    .iter()
                    .find(|a| &a.key == question.key())
                    .map(|a| AnsweredQuestion {
                        number: index + 1,
                        prompt: question.prompt().to_string(),
                        answer: a.text.clone(),
                        valid: a.valid,
                    })
            })
            .collect();

        Ok(Self {
            session_id: *session.id(),
            title: REPORT_TITLE.to_string(),
            generated_at: Timestamp::now(),
            score: session.score(),
            max_score: session.max_score(),
            classification,
            message: ReadinessScorer::message(classification).to_string(),
            summary,
            summary_text,
            answers,
        })
    }

    /// Label shown as "Readiness Status".
    pub fn status_label(&self) -> &'static str {
        self.classification.label()
    }
}
