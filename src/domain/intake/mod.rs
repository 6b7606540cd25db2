//! Intake domain module.
//!
//! The question catalog, answer validators, and the session state machine
//! that walks a respondent through the catalog one answer at a time.
//!
//! # Lifecycle
//!
//! ```text
//! InProgress ──submit_answer──▶ InProgress ──(last answer)──▶ Complete
//! ```
//!
//! Invalid answers still advance the session; they just earn no score.

mod catalog;
mod errors;
mod progress;
mod question;
mod session;
mod validator;

pub use catalog::QuestionCatalog;
pub use errors::{CatalogError, IntakeError};
pub use progress::{ConfidenceLevel, ProgressSnapshot};
pub use question::{QuestionDefinition, QuestionKey, MAX_QUESTION_WEIGHT};
pub use session::{Answer, IntakeSession, SubmitOutcome};
pub use validator::{KeywordValidator, MinimumLengthValidator, MonthYearValidator, Validator};
