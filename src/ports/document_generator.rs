//! Document Generator Port - Markdown generation interface.
//!
//! This port defines the contract for turning a completed intake report into
//! a markdown document. Adapters (like TemplateDocumentGenerator) provide the
//! implementation; export services convert the markdown to other formats.

use thiserror::Error;

use crate::domain::analysis::IntakeReport;

/// Port for generating markdown documents from intake reports.
///
/// # Contract
///
/// Implementations must:
/// - Start with the report title as a level-one heading
/// - Include readiness status, readiness message, and consultant summary
/// - List every answered question in catalog order
/// - Never reorder or edit answer text
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn DocumentGenerator = get_generator();
/// let markdown = generator.generate(&report, &GenerationOptions::default())?;
/// ```
pub trait DocumentGenerator: Send + Sync {
    /// Generate the full markdown document.
    fn generate(
        &self,
        report: &IntakeReport,
        options: &GenerationOptions,
    ) -> Result<String, DocumentError>;
}

/// Options for document generation.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Include session id, timestamp, and raw score.
    pub include_metadata: bool,

    /// Mark answers that failed validation.
    pub mark_unvalidated_answers: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            mark_unvalidated_answers: false,
        }
    }
}

impl GenerationOptions {
    /// Options for reviewer copies: everything shown.
    pub fn reviewer() -> Self {
        Self {
            include_metadata: true,
            mark_unvalidated_answers: true,
        }
    }

    /// Options for the respondent's own copy.
    pub fn respondent() -> Self {
        Self {
            include_metadata: false,
            mark_unvalidated_answers: false,
        }
    }
}

/// Errors that can occur during document generation.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Report has no answers to render")]
    EmptyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_include_metadata_only() {
        let options = GenerationOptions::default();
        assert!(options.include_metadata);
        assert!(!options.mark_unvalidated_answers);
    }

    #[test]
    fn respondent_options_hide_metadata() {
        assert!(!GenerationOptions::respondent().include_metadata);
        assert!(GenerationOptions::reviewer().mark_unvalidated_answers);
    }

    #[test]
    fn document_error_displays() {
        assert_eq!(
            DocumentError::EmptyReport.to_string(),
            "Report has no answers to render"
        );
    }
}
