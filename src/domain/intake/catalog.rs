//! Question catalog - the fixed, ordered interview rubric.
//!
//! Order is significant: it drives both the interview sequence and the
//! missing-response checklist in the consultant summary.

use std::collections::HashSet;

use super::errors::CatalogError;
use super::question::{QuestionDefinition, QuestionKey};
use super::validator::{KeywordValidator, MinimumLengthValidator, MonthYearValidator};

/// Immutable ordered list of questions with unique keys.
///
/// # Invariants
///
/// - At least one question
/// - No two questions share a key
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    /// Builds a catalog, checking its invariants once.
    ///
    /// # Errors
    ///
    /// - `Empty` if no questions are given
    /// - `DuplicateKey` for the first key seen twice
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.key()) {
                return Err(CatalogError::DuplicateKey(question.key().clone()));
            }
        }

        Ok(Self { questions })
    }

    /// The immigration intake rubric.
    ///
    /// Ten questions; a fully valid interview scores 27.
    pub fn standard() -> Result<Self, CatalogError> {
        let questions = vec![
            QuestionDefinition::new(
                "birthCountry",
                "What country were you born in?",
                "Birth country helps determine eligibility categories.",
                2,
            )?,
            QuestionDefinition::new(
                "entryDate",
                "What is your date of last entry to the U.S.? Please provide month and year.",
                "Entry date connects to official travel records.",
                3,
            )?
            .with_validator(MonthYearValidator::new()),
            QuestionDefinition::new(
                "entryStatus",
                "What status did you have when you entered?",
                "Entry status affects legal pathways.",
                2,
            )?
            .with_validator(KeywordValidator::entry_status()),
            QuestionDefinition::new(
                "courtHistory",
                "Have you ever been in immigration court proceedings?",
                "Court history affects documentation needed.",
                3,
            )?
            .with_validator(KeywordValidator::history()),
            QuestionDefinition::new(
                "pendingApps",
                "Do you currently have any applications pending with USCIS?",
                "Pending filings help avoid duplicate submissions.",
                2,
            )?
            .with_validator(KeywordValidator::history()),
            QuestionDefinition::new(
                "removalHistory",
                "Have you ever been ordered removed or deported?",
                "Prior removal history is important for review.",
                3,
            )?
            .with_validator(KeywordValidator::history()),
            QuestionDefinition::new(
                "validPassport",
                "Do you have a valid passport from your home country?",
                "Travel documents are often required for processing.",
                2,
            )?
            .with_validator(KeywordValidator::yes_no()),
            QuestionDefinition::new(
                "documents",
                "Please list any immigration-related documents you currently possess \
                 (e.g. I-94, Employment Authorization, Green Card).",
                "Document inventory helps determine next steps.",
                3,
            )?
            .with_validator(MinimumLengthValidator::non_trivial()),
            QuestionDefinition::new(
                "visaDocs",
                "Do you have a visa or similar documentation? If so, please specify the type \
                 and issue date.",
                "Visa status is crucial for understanding eligibility for certain benefits.",
                3,
            )?
            .with_validator(MinimumLengthValidator::non_trivial()),
            QuestionDefinition::new(
                "asylumStatus",
                "Have you ever applied for asylum or refugee status? If so, please specify \
                 the date of application.",
                "Asylum or refugee status can influence your path forward.",
                4,
            )?
            .with_validator(MonthYearValidator::new()),
        ];

        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a zero-based step.
    pub fn get(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    /// Question and its position for a key.
    pub fn find(&self, key: &QuestionKey) -> Option<(usize, &QuestionDefinition)> {
        self.questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter()
    }

    /// Highest achievable score.
    pub fn total_weight(&self) -> u32 {
        self.questions.iter().map(QuestionDefinition::weight).sum()
    }
}
