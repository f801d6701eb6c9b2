//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid model variant: {0} (expected fast, balanced or strongest)")]
    InvalidModel(String),

    #[error("Invalid sample size: {0} (must be between 1 and {max})", max = crate::sampling::MAX_SAMPLE_SIZE)]
    InvalidSampleSize(usize),

    #[error("Invalid dispatch mode: {0} (expected sequential or parallel)")]
    InvalidDispatchMode(String),
}
