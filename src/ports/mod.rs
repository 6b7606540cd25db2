//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the intake core and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `DocumentGenerator` - Intake report to markdown
//! - `DocumentExportService` - Markdown to HTML/PDF
//! - `DocumentFileStorage` - Persisting exported files
//!
//! ## Conversation Ports
//!
//! - `AcknowledgementSource` - Flavor text after each answer

mod acknowledgement_source;
mod document_export_service;
mod document_file_storage;
mod document_generator;

pub use acknowledgement_source::AcknowledgementSource;
pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument,
};
pub use document_file_storage::{DocumentFileStorage, StorageError, StoredFile};
pub use document_generator::{DocumentError, DocumentGenerator, GenerationOptions};
