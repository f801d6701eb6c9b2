//! Sampling subdomain: one yes/no question asked N times.
//!
//! - [`config`] - per-run configuration ([`QueryConfig`], [`SampleSize`], [`DispatchMode`])
//! - [`outcome`] - raw and classified per-query outcomes
//! - [`classifier`] - reply text to verdict
//! - [`aggregate`] - counts, point estimate and posterior interval
//! - [`report`] - the final report handed to the presentation layer

pub mod aggregate;
pub mod classifier;
pub mod config;
pub mod outcome;
pub mod report;

pub use aggregate::{CONFIDENCE_LEVEL, ConfidenceInterval, Estimate, SampleResult};
pub use classifier::{classify, parse_verdict};
pub use config::{DispatchMode, MAX_SAMPLE_SIZE, QueryConfig, SampleSize};
pub use outcome::{ClassifiedOutcome, FailureKind, FailureReason, RawOutcome, Verdict};
pub use report::{ResponseRecord, SUMMARY_FAILURE_PLACEHOLDER, SampleReport};
