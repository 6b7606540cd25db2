//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    ReadinessThresholds, DEFAULT_PENDING_THRESHOLD, DEFAULT_PURSUE_THRESHOLD,
};

/// Readiness thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Minimum score classified as Pursue
    #[serde(default = "default_pursue_threshold")]
    pub pursue_threshold: u32,

    /// Minimum score classified as Pending
    #[serde(default = "default_pending_threshold")]
    pub pending_threshold: u32,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pursue_threshold == 0 {
            return Err(ValidationError::InvalidPursueThreshold);
        }
        if self.pending_threshold >= self.pursue_threshold {
            return Err(ValidationError::ThresholdOrder {
                pursue: self.pursue_threshold,
                pending: self.pending_threshold,
            });
        }
        Ok(())
    }

    /// Domain thresholds built from this section
    pub fn thresholds(&self) -> Result<ReadinessThresholds, ValidationError> {
        ReadinessThresholds::new(self.pursue_threshold, self.pending_threshold).map_err(|_| {
            ValidationError::ThresholdOrder {
                pursue: self.pursue_threshold,
                pending: self.pending_threshold,
            }
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pursue_threshold: default_pursue_threshold(),
            pending_threshold: default_pending_threshold(),
        }
    }
}

fn default_pursue_threshold() -> u32 {
    DEFAULT_PURSUE_THRESHOLD
}

fn default_pending_threshold() -> u32 {
    DEFAULT_PENDING_THRESHOLD
}
