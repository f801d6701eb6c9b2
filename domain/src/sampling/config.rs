//! Per-run sampling configuration

use crate::core::error::DomainError;
use crate::core::model::ModelVariant;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of queries in one run
pub const MAX_SAMPLE_SIZE: usize = 100;

/// Number of independent queries in one run, always in `1..=MAX_SAMPLE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SampleSize(usize);

impl SampleSize {
    pub fn new(size: usize) -> Result<Self, DomainError> {
        if (1..=MAX_SAMPLE_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(DomainError::InvalidSampleSize(size))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<usize> for SampleSize {
    type Error = DomainError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        SampleSize::new(size)
    }
}

impl From<SampleSize> for usize {
    fn from(size: SampleSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for SampleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the queries of one run are issued
///
/// The mode only affects latency and progress feedback; both modes yield
/// the same ordered sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// One query in flight at a time, with progress after each
    #[default]
    Sequential,
    /// All queries in flight at once
    Parallel,
}

impl DispatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMode::Sequential => "sequential",
            DispatchMode::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DispatchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => Ok(DispatchMode::Sequential),
            "parallel" | "par" | "async" => Ok(DispatchMode::Parallel),
            other => Err(DomainError::InvalidDispatchMode(other.to_string())),
        }
    }
}

/// Immutable configuration for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Model tier used for the yes/no queries
    pub model: ModelVariant,
    /// Ask the model to justify its answer
    pub request_explanation: bool,
    /// Number of independent queries
    pub sample_size: SampleSize,
}

impl QueryConfig {
    pub fn new(model: ModelVariant, sample_size: SampleSize) -> Self {
        Self {
            model,
            request_explanation: false,
            sample_size,
        }
    }

    pub fn with_explanation(mut self, request_explanation: bool) -> Self {
        self.request_explanation = request_explanation;
        self
    }
}
