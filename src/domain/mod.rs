//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, status, errors)
//! - `intake` - Question catalog, validators, and the intake session state machine
//! - `analysis` - Pure services for readiness scoring, summaries, and reports

pub mod analysis;
pub mod foundation;
pub mod intake;
