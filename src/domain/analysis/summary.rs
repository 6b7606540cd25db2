//! Consultant summary - headline plus a checklist of unanswered questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::readiness::ReadinessClassification;
use crate::domain::foundation::ValidationError;
use crate::domain::intake::IntakeSession;

/// How the summary is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Legacy single line: lines joined by one space, gaps prefixed with `- `.
    #[default]
    Joined,
    /// One entry per line.
    Lines,
}

impl FromStr for SummaryFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joined" => Ok(SummaryFormat::Joined),
            "lines" => Ok(SummaryFormat::Lines),
            other => Err(ValidationError::invalid_format(
                "summary_format",
                format!("unknown format '{}'", other),
            )),
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryFormat::Joined => write!(f, "joined"),
            SummaryFormat::Lines => write!(f, "lines"),
        }
    }
}

/// Structured consultant summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultantSummary {
    pub classification: ReadinessClassification,
    pub headline: String,
    /// Prompts with no answer or a blank one, in catalog order.
    pub missing_prompts: Vec<String>,
}

impl ConsultantSummary {
    pub fn has_gaps(&self) -> bool {
        !self.missing_prompts.is_empty()
    }

    /// Headline followed by one `Missing response for: "<prompt>"` per gap.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.headline.clone())
            .chain(
                self.missing_prompts
                    .iter()
                    .map(|prompt| format!("Missing response for: \"{}\"", prompt)),
            )
            .collect()
    }

    /// Legacy single-line text.
    pub fn joined(&self) -> String {
        std::iter::once(self.headline.clone())
            .chain(
                self.missing_prompts
                    .iter()
                    .map(|prompt| format!("- Missing response for: \"{}\"", prompt)),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self, format: SummaryFormat) -> String {
        match format {
            SummaryFormat::Joined => self.joined(),
            SummaryFormat::Lines => self.lines().join("\n"),
        }
    }
}

/// Builds consultant summaries from session state.
pub struct SummaryGenerator;

impl SummaryGenerator {
    /// Summarizes a session for a reviewer.
    ///
    /// Every catalog question whose answer is absent or blank after trimming
    /// gets a line. `submit_answer` accepts whitespace-only text, so this is
    /// where such answers surface as gaps.
    pub fn summarize(
        session: &IntakeSession,
        classification: ReadinessClassification,
    ) -> ConsultantSummary {
        let missing_prompts = session
            .catalog()
            .iter()
            .filter(|q| {
                session
                    .answer_for(q.key())
                    .map_or(true, |answer| answer.trim().is_empty())
            })
            .map(|q| q.prompt().to_string())
            .collect();

        ConsultantSummary {
            classification,
            headline: classification.headline().to_string(),
            missing_prompts,
        }
    }

    /// Summarizes and renders in one step.
    pub fn summarize_text(
        session: &IntakeSession,
        classification: ReadinessClassification,
        format: SummaryFormat,
    ) -> String {
        Self::summarize(session, classification).render(format)
    }
}
