//! Progress snapshot for presentation collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Coarse encouragement level shown next to the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    GettingStarted,
    Organized,
    ConsultantReady,
}

impl ConfidenceLevel {
    /// Below 30% is getting started, below 90% organized, otherwise ready.
    pub fn from_percent(percent: Percentage) -> Self {
        match percent.value() {
            0..=29 => ConfidenceLevel::GettingStarted,
            30..=89 => ConfidenceLevel::Organized,
            _ => ConfidenceLevel::ConsultantReady,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::GettingStarted => "Getting Started",
            ConfidenceLevel::Organized => "Organized",
            ConfidenceLevel::ConsultantReady => "Consultant Ready",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Confidence Level: {}", self.label())
    }
}

/// Read-only view of how far an interview has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub answered: usize,
    pub total: usize,
    /// `answered / total`, in `[0, 1]`.
    pub fraction: f64,
    pub percent: Percentage,
    pub confidence: ConfidenceLevel,
}

impl ProgressSnapshot {
    pub fn new(answered: usize, total: usize) -> Self {
        let fraction = if total == 0 {
            1.0
        } else {
            (answered.min(total) as f64) / (total as f64)
        };
        let percent = Percentage::from_ratio(fraction);

        Self {
            answered,
            total,
            fraction,
            percent,
            confidence: ConfidenceLevel::from_percent(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds() {
        let level = |percent| ConfidenceLevel::from_percent(Percentage::new(percent));

        assert_eq!(level(0), ConfidenceLevel::GettingStarted);
        assert_eq!(level(29), ConfidenceLevel::GettingStarted);
        assert_eq!(level(30), ConfidenceLevel::Organized);
        assert_eq!(level(89), ConfidenceLevel::Organized);
        assert_eq!(level(90), ConfidenceLevel::ConsultantReady);
    }

    #[test]
    fn confidence_display_matches_meter_text() {
        assert_eq!(
            ConfidenceLevel::Organized.to_string(),
            "Confidence Level: Organized"
        );
    }

    #[test]
    fn snapshot_for_ten_question_interview() {
        let start = ProgressSnapshot::new(0, 10);
        assert_eq!(start.fraction, 0.0);
        assert_eq!(start.confidence, ConfidenceLevel::GettingStarted);

        let third = ProgressSnapshot::new(3, 10);
        assert_eq!(third.percent.value(), 30);
        assert_eq!(third.confidence, ConfidenceLevel::Organized);

        let ninth = ProgressSnapshot::new(9, 10);
        assert_eq!(ninth.confidence, ConfidenceLevel::ConsultantReady);

        let done = ProgressSnapshot::new(10, 10);
        assert_eq!(done.fraction, 1.0);
        assert_eq!(done.percent, Percentage::HUNDRED);
    }
}
