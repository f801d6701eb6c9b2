//! Final report of one sampling run

use super::aggregate::{Estimate, SampleResult};
use super::config::{DispatchMode, QueryConfig};
use super::outcome::ClassifiedOutcome;
use crate::core::model::ModelVariant;
use serde::{Deserialize, Serialize};

/// Placeholder summary used when the summarization call fails
pub const SUMMARY_FAILURE_PLACEHOLDER: &str = "Error summarizing explanations";

/// One reply as exported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Reply text (empty when the query failed)
    pub text: String,
    pub was_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ClassifiedOutcome> for ResponseRecord {
    fn from(outcome: &ClassifiedOutcome) -> Self {
        Self {
            text: outcome.text.clone(),
            was_valid: outcome.is_valid(),
            error: outcome.failure.as_ref().map(|f| f.to_string()),
        }
    }
}

/// Complete result of one run (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReport {
    pub question: String,
    pub model: ModelVariant,
    pub dispatch_mode: DispatchMode,
    pub request_explanation: bool,
    pub result: SampleResult,
    /// Present only in explanation mode with at least one valid reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_summary: Option<String>,
    /// Replies in query order
    pub responses: Vec<ResponseRecord>,
}

impl SampleReport {
    pub fn new(
        question: impl Into<String>,
        config: &QueryConfig,
        dispatch_mode: DispatchMode,
        classified: &[ClassifiedOutcome],
    ) -> Self {
        Self {
            question: question.into(),
            model: config.model,
            dispatch_mode,
            request_explanation: config.request_explanation,
            result: SampleResult::aggregate(classified),
            explanation_summary: None,
            responses: classified.iter().map(ResponseRecord::from).collect(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.explanation_summary = Some(summary.into());
        self
    }

    pub fn valid_response_count(&self) -> usize {
        self.result.valid_count()
    }

    pub fn has_valid_responses(&self) -> bool {
        self.result.has_valid_responses()
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.result.estimate.as_ref()
    }

    /// Whether summarization was attempted and failed
    pub fn summary_failed(&self) -> bool {
        self.explanation_summary.as_deref() == Some(SUMMARY_FAILURE_PLACEHOLDER)
    }
}
