//! Readiness scoring - maps an intake score to a consultation tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Score at or above which a respondent is ready to pursue a consultation.
pub const DEFAULT_PURSUE_THRESHOLD: u32 = 20;

/// Score at or above which a respondent is pending further preparation.
pub const DEFAULT_PENDING_THRESHOLD: u32 = 12;

/// Three-tier readiness outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessClassification {
    Pursue,
    Pending,
    Fail,
}

impl ReadinessClassification {
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessClassification::Pursue => "Pursue",
            ReadinessClassification::Pending => "Pending",
            ReadinessClassification::Fail => "Fail",
        }
    }

    /// Recommendation addressed to the respondent.
    pub fn message(&self) -> &'static str {
        match self {
            ReadinessClassification::Pursue => {
                "You're well-prepared and ready to schedule a consultation soon."
            }
            ReadinessClassification::Pending => {
                "You've made a good start — reviewing additional resources is recommended \
                 before consultation."
            }
            ReadinessClassification::Fail => {
                "Based on your responses, more preparation is advised before a consultation."
            }
        }
    }

    /// Opening sentence of the consultant-facing summary.
    pub fn headline(&self) -> &'static str {
        match self {
            ReadinessClassification::Pursue => "Applicant is well-prepared for consultation.",
            ReadinessClassification::Pending => {
                "Applicant has partial information; further preparation suggested."
            }
            ReadinessClassification::Fail => {
                "Applicant appears unprepared; additional information gathering needed."
            }
        }
    }
}

impl fmt::Display for ReadinessClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two ascending score cut-offs.
///
/// # Invariants
///
/// - `pending < pursue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessThresholds {
    pursue: u32,
    pending: u32,
}

impl ReadinessThresholds {
    /// # Errors
    ///
    /// - `InvalidFormat` if `pending` is not strictly below `pursue`
    pub fn new(pursue: u32, pending: u32) -> Result<Self, ValidationError> {
        if pending >= pursue {
            return Err(ValidationError::invalid_format(
                "readiness_thresholds",
                format!(
                    "pending threshold ({}) must be below pursue threshold ({})",
                    pending, pursue
                ),
            ));
        }
        Ok(Self { pursue, pending })
    }

    pub fn pursue(&self) -> u32 {
        self.pursue
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            pursue: DEFAULT_PURSUE_THRESHOLD,
            pending: DEFAULT_PENDING_THRESHOLD,
        }
    }
}

/// Pure scoring functions.
pub struct ReadinessScorer;

impl ReadinessScorer {
    /// Classifies a score. Boundary values belong to the higher tier.
    pub fn classify(score: u32, thresholds: &ReadinessThresholds) -> ReadinessClassification {
        if score >= thresholds.pursue() {
            ReadinessClassification::Pursue
        } else if score >= thresholds.pending() {
            ReadinessClassification::Pending
        } else {
            ReadinessClassification::Fail
        }
    }

    pub fn message(classification: ReadinessClassification) -> &'static str {
        classification.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ReadinessClassification; 3] = [
        ReadinessClassification::Pursue,
        ReadinessClassification::Pending,
        ReadinessClassification::Fail,
    ];

    #[test]
    fn default_thresholds_are_20_and_12() {
        let t = ReadinessThresholds::default();
        assert_eq!(t.pursue(), 20);
        assert_eq!(t.pending(), 12);
    }

    #[test]
    fn thresholds_must_ascend() {
        assert!(ReadinessThresholds::new(10, 10).is_err());
        assert!(ReadinessThresholds::new(5, 10).is_err());
        assert!(ReadinessThresholds::new(10, 9).is_ok());
    }

    #[test]
    fn classify_boundaries_belong_to_higher_tier() {
        let t = ReadinessThresholds::default();
        assert_eq!(ReadinessScorer::classify(12, &t), ReadinessClassification::Pending);
        assert_eq!(ReadinessScorer::classify(11, &t), ReadinessClassification::Fail);
        assert_eq!(ReadinessScorer::classify(20, &t), ReadinessClassification::Pursue);
        assert_eq!(ReadinessScorer::classify(19, &t), ReadinessClassification::Pending);
    }

    #[test]
    fn classify_uses_supplied_thresholds() {
        let t = ReadinessThresholds::new(3, 1).unwrap();
        assert_eq!(ReadinessScorer::classify(0, &t), ReadinessClassification::Fail);
        assert_eq!(ReadinessScorer::classify(1, &t), ReadinessClassification::Pending);
        assert_eq!(ReadinessScorer::classify(3, &t), ReadinessClassification::Pursue);
        assert_eq!(ReadinessScorer::classify(u32::MAX, &t), ReadinessClassification::Pursue);
    }

    #[test]
    fn every_classification_has_distinct_texts() {
        for c in ALL {
            assert!(!ReadinessScorer::message(c).is_empty());
            assert!(!c.headline().is_empty());
        }
        assert_ne!(ALL[0].message(), ALL[1].message());
        assert_ne!(ALL[1].headline(), ALL[2].headline());
    }

    #[test]
    fn pursue_message_text() {
        assert_eq!(
            ReadinessClassification::Pursue.message(),
            "You're well-prepared and ready to schedule a consultation soon."
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ReadinessClassification::Pending.to_string(), "Pending");
    }
}
