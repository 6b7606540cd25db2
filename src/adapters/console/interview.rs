//! Console interview driver.
//!
//! Reads one answer per line and writes the transcript. Generic over the
//! reader and writer so tests can drive it with in-memory buffers.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::application::handlers::intake::{
    ConversationError, ConversationTurn, IntakeConversation, IntakeOutcome, QuestionPrompt,
    COMPLETION_MESSAGE,
};

/// Shown when the respondent submits a blank line.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a response before continuing.";

/// Errors from the console driver.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed after {answered} of {total} questions")]
    InputClosed { answered: usize, total: usize },

    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

/// Runs an interview over a line reader and a writer.
pub struct ConsoleInterview<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> ConsoleInterview<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Asks every remaining question, then prints the readiness result.
    ///
    /// Blank lines are re-prompted and never reach the session.
    ///
    /// # Errors
    ///
    /// - `InputClosed` if the reader hits end of input before completion
    /// - `Io` if reading or writing fails
    pub async fn run(
        &mut self,
        conversation: &mut IntakeConversation,
    ) -> Result<IntakeOutcome, ConsoleError> {
        while let Some(prompt) = conversation.current_prompt() {
            self.show_prompt(&prompt).await?;

            let turn = loop {
                let line = self.read_line().await?.ok_or(ConsoleError::InputClosed {
                    answered: conversation.session().current_step(),
                    total: prompt.total,
                })?;

                match conversation.respond(&line) {
                    Ok(turn) => break turn,
                    Err(ConversationError::EmptyAnswer) => {
                        debug!(step = prompt.number, "blank input re-prompted");
                        self.write_line(EMPTY_INPUT_NOTICE).await?;
                        self.write_marker().await?;
                    }
                    Err(err) => return Err(err.into()),
                }
            };

            self.show_turn(&turn).await?;
        }

        let outcome = conversation.outcome().ok_or_else(|| {
            ConsoleError::InputClosed {
                answered: conversation.session().current_step(),
                total: conversation.session().catalog().len(),
            }
        })?;
        self.show_outcome(&outcome).await?;
        Ok(outcome)
    }

    async fn show_prompt(&mut self, prompt: &QuestionPrompt) -> Result<(), ConsoleError> {
        self.write_line("").await?;
        self.write_line(&format!(
            "Question {} of {}: {}",
            prompt.number, prompt.total, prompt.prompt
        ))
        .await?;
        if !prompt.rationale.is_empty() {
            self.write_line(&format!("Why we ask this: {}", prompt.rationale))
                .await?;
        }
        self.write_marker().await
    }

    async fn show_turn(&mut self, turn: &ConversationTurn) -> Result<(), ConsoleError> {
        if !turn.acknowledgement.is_empty() {
            self.write_line(&turn.acknowledgement).await?;
        }
        self.write_line(&format!(
            "Progress: {} | {}",
            turn.progress.percent, turn.progress.confidence
        ))
        .await
    }

    async fn show_outcome(&mut self, outcome: &IntakeOutcome) -> Result<(), ConsoleError> {
        self.write_line("").await?;
        self.write_line(COMPLETION_MESSAGE).await?;
        self.write_line(&outcome.message).await?;
        self.write_line(&format!(
            "Consultation Readiness: {}",
            outcome.classification
        ))
        .await?;
        self.write_line("").await?;
        self.write_line("Consultant Summary:").await?;
        self.write_line(&outcome.summary_text).await
    }

    async fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn write_marker(&mut self) -> Result<(), ConsoleError> {
        self.writer.write_all(b"> ").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
