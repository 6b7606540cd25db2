//! Acknowledgement adapters - Implementations of AcknowledgementSource.
//!
//! - `RandomAcknowledgements` - Uniform pick per answer (production)
//! - `FixedAcknowledgements` - Deterministic rotation (tests, scripted runs)

mod fixed;
mod random;

pub use fixed::FixedAcknowledgements;
pub use random::RandomAcknowledgements;

/// Stock phrases replied after each answer.
pub const ACKNOWLEDGEMENTS: [&str; 5] = [
    "Thank you — that helps.",
    "Got it, I’ve noted that.",
    "Perfect, that’s clear.",
    "Thanks for sharing that.",
    "I appreciate the detail.",
];
