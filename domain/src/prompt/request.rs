//! A single request to the model service

use super::template::PromptTemplate;
use crate::core::model::ModelVariant;
use crate::core::question::Question;
use crate::sampling::config::QueryConfig;
use serde::{Deserialize, Serialize};

/// Output token cap for a sample query
pub const SAMPLE_MAX_TOKENS: u32 = 500;

/// Output token cap for the explanation summary
pub const SUMMARY_MAX_TOKENS: u32 = 200;

/// Everything the gateway needs for one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub model: ModelVariant,
    pub prompt: String,
    pub max_tokens: u32,
}

impl ModelRequest {
    pub fn new(model: ModelVariant, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            max_tokens,
        }
    }

    /// The request issued for each of the N sample queries
    pub fn sample_query(question: &Question, config: &QueryConfig) -> Self {
        Self::new(
            config.model,
            PromptTemplate::binary_question(question.content(), config.request_explanation),
            SAMPLE_MAX_TOKENS,
        )
    }

    /// The summary request; always uses the strongest model
    pub fn summary(explanations: &[String]) -> Self {
        Self::new(
            ModelVariant::Strongest,
            PromptTemplate::summary_prompt(explanations),
            SUMMARY_MAX_TOKENS,
        )
    }
}
