//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod intake;

pub use intake::{
    ConversationError, ConversationTurn, ExportReportCommand, ExportReportError,
    ExportReportHandler, ExportReportResult, IntakeConversation, IntakeOutcome, QuestionPrompt,
    COMPLETION_MESSAGE, DEFAULT_BASE_FILENAME,
};
