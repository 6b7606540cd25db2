//! Document adapters - Implementations for document generation, export, and storage.
//!
//! - `TemplateDocumentGenerator` - Generates markdown from an intake report
//! - `PulldownExportService` - Converts markdown to HTML and PDF
//! - `LocalDocumentFileStorage` - Stores exports on local filesystem

mod local_file_storage;
mod pulldown_export_service;
mod template_generator;

pub use local_file_storage::LocalDocumentFileStorage;
pub use pulldown_export_service::{PulldownExportService, DEFAULT_PDF_TIMEOUT_SECS};
pub use template_generator::TemplateDocumentGenerator;
