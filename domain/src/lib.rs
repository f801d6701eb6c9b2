//! Domain layer for hivesight
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sample
//!
//! A yes/no [`Question`] is asked N times ([`SampleSize`]). Every reply is a
//! [`RawOutcome`], classified into a [`Verdict`] (Yes, No or Invalid).
//!
//! ## Inference
//!
//! Valid verdicts form a Bernoulli sample. [`SampleResult`] reports the
//! counts, the share of "yes" answers, and a 95% credible interval from the
//! Beta(yes + 1, no + 1) posterior.

pub mod config;
pub mod core;
pub mod prompt;
pub mod sampling;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{error::DomainError, model::ModelVariant, question::Question};
pub use prompt::{ModelRequest, PromptTemplate, SAMPLE_MAX_TOKENS, SUMMARY_MAX_TOKENS};
pub use sampling::{
    CONFIDENCE_LEVEL, ClassifiedOutcome, ConfidenceInterval, DispatchMode, Estimate, FailureKind,
    FailureReason, MAX_SAMPLE_SIZE, QueryConfig, RawOutcome, ResponseRecord,
    SUMMARY_FAILURE_PLACEHOLDER, SampleReport, SampleResult, SampleSize, Verdict, classify,
    parse_verdict,
};
