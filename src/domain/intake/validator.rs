//! Answer validators - pattern-based acceptance checks.
//!
//! Validators flag clearly malformed answers without trying to understand
//! them. A failed check costs the respondent the question's weight but never
//! blocks the interview.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Numeric month (1-12, optional zero pad) or full English month name,
/// then a four-digit year, separated by an optional slash and/or space.
static MONTH_YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:0?[1-9]|1[0-2])/? ?[0-9]{4}|(?:january|february|march|april|may|june|july|august|september|october|november|december) ?[0-9]{4})$",
    )
    .expect("month/year pattern is a valid regex")
});

/// A pure predicate judging whether a raw answer is well-formed.
///
/// Implementations must accept any text, including the empty string,
/// without panicking.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Returns true if the answer is acceptable for its question.
    fn validate(&self, answer: &str) -> bool;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Accepts a month and year, e.g. `03/2021`, `3 2021`, `March2021`.
///
/// Surrounding whitespace is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthYearValidator;

impl MonthYearValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for MonthYearValidator {
    fn validate(&self, answer: &str) -> bool {
        MONTH_YEAR_PATTERN.is_match(answer.trim())
    }

    fn name(&self) -> &'static str {
        "month_year"
    }
}

/// Accepts answers containing at least one keyword (case-insensitive substring).
#[derive(Debug, Clone)]
pub struct KeywordValidator {
    name: &'static str,
    keywords: Vec<String>,
}

impl KeywordValidator {
    /// Creates a validator for an arbitrary keyword set.
    pub fn new<I, S>(name: &'static str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// History questions: any yes/no style reply.
    pub fn history() -> Self {
        Self::new("history_keywords", ["no", "none", "never", "yes", "have"])
    }

    /// Plain yes/no questions.
    pub fn yes_no() -> Self {
        Self::new("yes_no", ["yes", "no"])
    }

    /// Immigration status at entry.
    pub fn entry_status() -> Self {
        Self::new(
            "entry_status",
            [
                "lawful", "valid", "visitor", "student", "work", "tourist", "diplomat",
                "refugee", "asylum", "parole",
            ],
        )
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Validator for KeywordValidator {
    fn validate(&self, answer: &str) -> bool {
        let haystack = answer.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Accepts answers whose trimmed length is strictly greater than a minimum.
#[derive(Debug, Clone, Copy)]
pub struct MinimumLengthValidator {
    min_exclusive: usize,
}

impl MinimumLengthValidator {
    pub fn new(min_exclusive: usize) -> Self {
        Self { min_exclusive }
    }

    /// Open-ended detail questions: more than two characters.
    pub fn non_trivial() -> Self {
        Self::new(2)
    }
}

impl Validator for MinimumLengthValidator {
    fn validate(&self, answer: &str) -> bool {
        answer.trim().chars().count() > self.min_exclusive
    }

    fn name(&self) -> &'static str {
        "minimum_length"
    }
}
