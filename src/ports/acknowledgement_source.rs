//! Acknowledgement Source Port - conversational flavor text.
//!
//! After each answer the interview replies with a short acknowledgement.
//! Choice of phrase is non-deterministic in production, so it sits behind
//! this port and tests inject a fixed source.

/// Port supplying the next acknowledgement phrase.
pub trait AcknowledgementSource: Send + Sync {
    fn next_acknowledgement(&self) -> String;
}
