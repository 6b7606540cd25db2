//! IntakeStatus enum for tracking the lifecycle of an intake interview.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state_machine::StateMachine;

/// Lifecycle status of an intake session.
///
/// `InProgress` loops on itself while questions remain and moves to
/// `Complete` after the last answer. Nothing leaves `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    #[default]
    InProgress,
    Complete,
}

impl IntakeStatus {
    /// Derives the status from a step index and catalog length.
    pub fn for_step(step: usize, catalog_len: usize) -> Self {
        if step >= catalog_len {
            IntakeStatus::Complete
        } else {
            IntakeStatus::InProgress
        }
    }

    /// Returns true if further answers may be submitted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, IntakeStatus::InProgress)
    }

    /// Returns true once every question has been answered.
    pub fn is_complete(&self) -> bool {
        matches!(self, IntakeStatus::Complete)
    }
}

impl StateMachine for IntakeStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use IntakeStatus::*;
        matches!((self, target), (InProgress, InProgress) | (InProgress, Complete))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use IntakeStatus::*;
        match self {
            InProgress => vec![InProgress, Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntakeStatus::InProgress => "In Progress",
            IntakeStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
