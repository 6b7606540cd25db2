//! Intake handlers - conversation orchestration and report export.

mod conduct_interview;
mod export_report;

pub use conduct_interview::{
    ConversationError, ConversationTurn, IntakeConversation, IntakeOutcome, QuestionPrompt,
    COMPLETION_MESSAGE,
};
pub use export_report::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
    DEFAULT_BASE_FILENAME,
};
