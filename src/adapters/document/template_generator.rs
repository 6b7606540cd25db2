//! Template-based document generator adapter.
//!
//! Renders a completed intake report as markdown using a fixed template.
//! This is the primary implementation of the DocumentGenerator port.

use crate::domain::analysis::IntakeReport;
use crate::ports::{DocumentError, DocumentGenerator, GenerationOptions};

/// Template-based implementation of DocumentGenerator.
///
/// Layout:
/// 1. Title heading
/// 2. Readiness status and message
/// 3. Consultant summary
/// 4. Numbered question and answer pairs
#[derive(Debug, Clone, Default)]
pub struct TemplateDocumentGenerator {}

impl TemplateDocumentGenerator {
    /// Creates a new template document generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the title and optional metadata block.
    fn generate_header(&self, report: &IntakeReport, options: &GenerationOptions) -> String {
        let mut header = format!("# {}\n\n", report.title);

        if options.include_metadata {
            header.push_str(&format!(
                "> **Session:** {} | **Generated:** {}\n",
                report.session_id,
                report.generated_at.to_display_string()
            ));
            header.push_str(&format!(
                "> **Score:** {} of {}\n\n",
                report.score, report.max_score
            ));
        }

        header
    }

    /// Generates the readiness status section.
    fn generate_readiness(&self, report: &IntakeReport) -> String {
        let mut section = String::from("## Readiness\n\n");
        section.push_str(&format!("**Readiness Status:** {}\n\n", report.status_label()));
        section.push_str(&format!("{}\n\n", report.message));
        section
    }

    /// Generates the consultant summary section.
    fn generate_summary(&self, report: &IntakeReport) -> String {
        let mut section = String::from("## Consultant Summary\n\n");
        let summary = &report.summary;

        section.push_str(&format!("{}\n\n", summary.headline));
        if summary.has_gaps() {
            for line in summary.lines().iter().skip(1) {
                section.push_str(&format!("- {}\n", escape_markdown(line)));
            }
            section.push('\n');
        }

        section
    }

    /// Generates the question and answer listing.
    fn generate_answers(&self, report: &IntakeReport, options: &GenerationOptions) -> String {
        let mut section = String::from("## Answers Summary\n\n");

        for answered in &report.answers {
            section.push_str(&format!(
                "**Q{}:** {}\n\n",
                answered.number,
                escape_markdown(&answered.prompt)
            ));

            let answer = if answered.answer.trim().is_empty() {
                "*No response*".to_string()
            } else {
                escape_markdown(&answered.answer)
            };
            let marker = if options.mark_unvalidated_answers && !answered.valid {
                " *(needs review)*"
            } else {
                ""
            };
            section.push_str(&format!("**A:** {}{}\n\n", answer, marker));
        }

        section
    }
}

impl DocumentGenerator for TemplateDocumentGenerator {
    fn generate(
        &self,
        report: &IntakeReport,
        options: &GenerationOptions,
    ) -> Result<String, DocumentError> {
        if report.answers.is_empty() {
            return Err(DocumentError::EmptyReport);
        }

        let mut doc = String::new();
        doc.push_str(&self.generate_header(report, options));
        doc.push_str("---\n\n");
        doc.push_str(&self.generate_readiness(report));
        doc.push_str(&self.generate_summary(report));
        doc.push_str("---\n\n");
        doc.push_str(&self.generate_answers(report, options));

        Ok(doc)
    }
}

/// Backslash-escapes markdown and HTML metacharacters so respondent text
/// renders literally.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '!' | '|' | '~' | '&'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ReadinessThresholds, SummaryFormat};
    use crate::domain::intake::{
        IntakeSession, MinimumLengthValidator, QuestionCatalog, QuestionDefinition,
    };
    use std::sync::Arc;

    fn test_generator() -> TemplateDocumentGenerator {
        TemplateDocumentGenerator::new()
    }

    fn report_for(answers: &[&str]) -> IntakeReport {
        let catalog = Arc::new(
            QuestionCatalog::new(vec![
                QuestionDefinition::new("country", "What is your country of birth?", "", 5)
                    .unwrap(),
                QuestionDefinition::new("docs", "What documents do you have?", "", 5)
                    .unwrap()
                    .with_validator(MinimumLengthValidator::non_trivial()),
            ])
            .unwrap(),
        );
        let mut session = IntakeSession::new(catalog);
        for answer in answers {
            session.submit_answer(*answer).unwrap();
        }
        let thresholds = ReadinessThresholds::new(10, 5).unwrap();
        IntakeReport::from_session(&session, &thresholds, SummaryFormat::Lines).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Header
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn header_starts_with_title() {
        let gen = test_generator();
        let report = report_for(&["Peru", "passport and lease"]);

        let header = gen.generate_header(&report, &GenerationOptions::default());

        assert!(header.starts_with("# Immigration Intake Summary\n"));
        assert!(header.contains("**Score:** 10 of 10"));
    }

    #[test]
    fn respondent_header_hides_metadata() {
        let gen = test_generator();
        let report = report_for(&["Peru", "passport and lease"]);

        let header = gen.generate_header(&report, &GenerationOptions::respondent());

        assert_eq!(header, "# Immigration Intake Summary\n\n");
    }

    // ───────────────────────────────────────────────────────────────
    // Sections
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn readiness_section_shows_status_and_message() {
        let gen = test_generator();
        let report = report_for(&["Peru", "no"]);

        let section = gen.generate_readiness(&report);

        assert!(section.contains("**Readiness Status:** Pending"));
        assert!(section.contains(&report.message));
    }

    #[test]
    fn summary_section_lists_blank_answers() {
        let gen = test_generator();
        let report = report_for(&["   ", "passport and lease"]);

        let section = gen.generate_summary(&report);

        assert!(section.contains("## Consultant Summary"));
        assert!(section.contains("- Missing response for: \"What is your country of birth?\""));
    }

    #[test]
    fn answers_are_numbered_in_catalog_order() {
        let gen = test_generator();
        let report = report_for(&["Peru", "passport and lease"]);

        let section = gen.generate_answers(&report, &GenerationOptions::default());

        let q1 = section.find("**Q1:** What is your country of birth?").unwrap();
        let q2 = section.find("**Q2:** What documents do you have?").unwrap();
        assert!(q1 < q2);
        assert!(section.contains("**A:** passport and lease"));
    }

    #[test]
    fn reviewer_copy_marks_unvalidated_answers() {
        let gen = test_generator();
        let report = report_for(&["Peru", "no"]);

        let reviewer = gen.generate_answers(&report, &GenerationOptions::reviewer());
        let plain = gen.generate_answers(&report, &GenerationOptions::default());

        assert!(reviewer.contains("**A:** no *(needs review)*"));
        assert!(!plain.contains("needs review"));
    }

    #[test]
    fn answers_are_escaped_as_literal_text() {
        let gen = test_generator();
        let report = report_for(&["<script>alert(1)</script>", "my *x* and <I-94>"]);

        let section = gen.generate_answers(&report, &GenerationOptions::default());

        assert!(section.contains("**A:** \\<script\\>alert(1)\\</script\\>"));
        assert!(section.contains("**A:** my \\*x\\* and \\<I-94\\>"));
        assert!(!section.contains("<script>"));
    }

    #[test]
    fn escape_markdown_leaves_plain_text_alone() {
        assert_eq!(escape_markdown("March 2021, Lima (Peru)"), "March 2021, Lima (Peru)");
        assert_eq!(escape_markdown("a_b & c"), "a\\_b \\& c");
    }

    // ───────────────────────────────────────────────────────────────
    // Full document
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn generate_orders_sections() {
        let gen = test_generator();
        let report = report_for(&["Peru", "passport and lease"]);

        let doc = gen.generate(&report, &GenerationOptions::default()).unwrap();

        let readiness = doc.find("## Readiness").unwrap();
        let summary = doc.find("## Consultant Summary").unwrap();
        let responses = doc.find("## Answers Summary").unwrap();
        assert!(readiness < summary && summary < responses);
    }

    #[test]
    fn generate_rejects_report_without_answers() {
        let gen = test_generator();
        let mut report = report_for(&["Peru", "passport and lease"]);
        report.answers.clear();

        let result = gen.generate(&report, &GenerationOptions::default());

        assert!(matches!(result, Err(DocumentError::EmptyReport)));
    }
}
