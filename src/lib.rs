//! Intake Readiness - Guided Immigration Intake Interview
//!
//! This crate walks a respondent through a fixed, weighted question catalog,
//! validates each answer, scores readiness for a professional consultation,
//! and produces a consultant-facing summary that can be exported.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
