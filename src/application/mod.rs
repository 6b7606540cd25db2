//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ConversationError, ConversationTurn, ExportReportCommand, ExportReportError,
    ExportReportHandler, ExportReportResult, IntakeConversation, IntakeOutcome, QuestionPrompt,
    COMPLETION_MESSAGE, DEFAULT_BASE_FILENAME,
};
