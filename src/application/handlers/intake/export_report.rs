//! ExportReportHandler - Command handler for exporting a completed intake.
//!
//! Pipeline: report → markdown (generator) → target format (export service)
//! → file (storage). JSON skips the generator and serializes the report.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::IntakeReport;
use crate::domain::foundation::ErrorCode;
use crate::ports::{
    DocumentError, DocumentExportService, DocumentFileStorage, DocumentGenerator, ExportError,
    ExportFormat, ExportedDocument, GenerationOptions, StorageError, StoredFile,
};

/// Default file stem for exports.
pub const DEFAULT_BASE_FILENAME: &str = "intake-summary";

/// Command to export an intake report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub report: IntakeReport,
    pub format: ExportFormat,
    /// File stem; the format's extension is appended.
    pub base_filename: String,
    pub options: GenerationOptions,
}

impl ExportReportCommand {
    pub fn new(report: IntakeReport, format: ExportFormat) -> Self {
        Self {
            report,
            format,
            base_filename: DEFAULT_BASE_FILENAME.to_string(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_base_filename(mut self, base_filename: impl Into<String>) -> Self {
        self.base_filename = base_filename.into();
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub filename: String,
    pub content_type: String,
    pub format: ExportFormat,
    pub stored: StoredFile,
}

/// Error type for report export.
#[derive(Debug, Clone)]
pub enum ExportReportError {
    /// Markdown generation failed.
    Generation(DocumentError),
    /// Format conversion failed.
    Export(ExportError),
    /// Writing the file failed.
    Storage(StorageError),
}

impl ExportReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportReportError::Generation(_) | ExportReportError::Export(_) => {
                ErrorCode::ExportFailed
            }
            ExportReportError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl std::fmt::Display for ExportReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportReportError::Generation(err) => write!(f, "Document generation failed: {}", err),
            ExportReportError::Export(err) => write!(f, "{}", err),
            ExportReportError::Storage(err) => write!(f, "Failed to store export: {}", err),
        }
    }
}

impl std::error::Error for ExportReportError {}

impl From<DocumentError> for ExportReportError {
    fn from(err: DocumentError) -> Self {
        ExportReportError::Generation(err)
    }
}

impl From<ExportError> for ExportReportError {
    fn from(err: ExportError) -> Self {
        ExportReportError::Export(err)
    }
}

impl From<StorageError> for ExportReportError {
    fn from(err: StorageError) -> Self {
        ExportReportError::Storage(err)
    }
}

/// Handler for exporting intake reports.
///
/// # Dependencies
///
/// - `DocumentGenerator`: Report to markdown
/// - `DocumentExportService`: Markdown to HTML/PDF
/// - `DocumentFileStorage`: Persist the result
pub struct ExportReportHandler {
    generator: Arc<dyn DocumentGenerator>,
    export_service: Arc<dyn DocumentExportService>,
    storage: Arc<dyn DocumentFileStorage>,
}

impl ExportReportHandler {
    pub fn new(
        generator: Arc<dyn DocumentGenerator>,
        export_service: Arc<dyn DocumentExportService>,
        storage: Arc<dyn DocumentFileStorage>,
    ) -> Self {
        Self {
            generator,
            export_service,
            storage,
        }
    }

    /// Renders the report without writing it anywhere.
    pub async fn render(
        &self,
        cmd: &ExportReportCommand,
    ) -> Result<ExportedDocument, ExportReportError> {
        let content = match cmd.format {
            ExportFormat::Json => serde_json::to_vec_pretty(&cmd.report)
                .map_err(|e| ExportError::JsonFailed(e.to_string()))?,
            ExportFormat::Markdown => self
                .generator
                .generate(&cmd.report, &cmd.options)?
                .into_bytes(),
            ExportFormat::Html => {
                let markdown = self.generator.generate(&cmd.report, &cmd.options)?;
                self.export_service.to_html(&markdown).await?.into_bytes()
            }
            ExportFormat::Pdf => {
                let markdown = self.generator.generate(&cmd.report, &cmd.options)?;
                self.export_service.to_pdf(&markdown).await?
            }
        };

        Ok(ExportedDocument::new(content, cmd.format, &cmd.base_filename))
    }

    pub async fn handle(
        &self,
        cmd: ExportReportCommand,
    ) -> Result<ExportReportResult, ExportReportError> {
        let document = self.render(&cmd).await.map_err(|err| {
            warn!(format = %cmd.format, error = %err, "export rendering failed");
            err
        })?;

        let stored = self
            .storage
            .write(&document.filename, &document.content)
            .await
            .map_err(|err| {
                warn!(filename = %document.filename, error = %err, "export write failed");
                ExportReportError::from(err)
            })?;

        info!(
            session_id = %cmd.report.session_id,
            path = %stored.path.display(),
            format = %document.format,
            size = stored.size_bytes,
            "intake exported"
        );

        Ok(ExportReportResult {
            filename: document.filename,
            content_type: document.content_type,
            format: document.format,
            stored,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
