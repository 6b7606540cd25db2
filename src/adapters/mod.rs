//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Markdown generation, HTML/PDF export, file storage
//! - `acknowledgements` - Conversational flavor text sources
//! - `console` - Terminal interview driver

pub mod acknowledgements;
pub mod console;
pub mod document;

pub use acknowledgements::{FixedAcknowledgements, RandomAcknowledgements, ACKNOWLEDGEMENTS};
pub use console::{ConsoleError, ConsoleInterview};
pub use document::{LocalDocumentFileStorage, PulldownExportService, TemplateDocumentGenerator};
