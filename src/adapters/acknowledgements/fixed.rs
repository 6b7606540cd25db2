//! Deterministic acknowledgement rotation.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::ACKNOWLEDGEMENTS;
use crate::ports::AcknowledgementSource;

/// Cycles through a fixed list of phrases in order.
#[derive(Debug)]
pub struct FixedAcknowledgements {
    phrases: Vec<String>,
    cursor: AtomicUsize,
}

impl FixedAcknowledgements {
    /// Rotates through `phrases`. An empty list yields empty strings.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Rotates through the stock phrases.
    pub fn stock() -> Self {
        Self::new(ACKNOWLEDGEMENTS)
    }
}

impl AcknowledgementSource for FixedAcknowledgements {
    fn next_acknowledgement(&self) -> String {
        if self.phrases.is_empty() {
            return String::new();
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.phrases.len();
        self.phrases[index].clone()
    }
}
