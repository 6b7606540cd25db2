//! Analysis Module - Pure domain services over intake sessions.
//!
//! # Components
//!
//! - `ReadinessScorer` - Score to `Pursue` / `Pending` / `Fail`
//! - `SummaryGenerator` - Consultant-facing headline and gap checklist
//! - `IntakeReport` - Frozen snapshot for document renderers
//!
//! All functions are pure. They read a session and return computed values;
//! no ports or adapters are involved.

mod readiness;
mod report;
mod summary;

pub use readiness::{
    ReadinessClassification, ReadinessScorer, ReadinessThresholds, DEFAULT_PENDING_THRESHOLD,
    DEFAULT_PURSUE_THRESHOLD,
};
pub use report::{AnsweredQuestion, IntakeReport, REPORT_TITLE};
pub use summary::{ConsultantSummary, SummaryFormat, SummaryGenerator};
