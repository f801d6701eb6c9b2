//! Explanation summary
//!
//! Condenses the accepted explanations of a run into one short synthesis.

use crate::ports::model_gateway::ModelGateway;
use hivesight_domain::{ModelRequest, SUMMARY_FAILURE_PLACEHOLDER};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Summarizes accepted explanations with a single strongest-model call
pub struct ExplanationSummarizer<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> ExplanationSummarizer<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Summarize the given explanations.
    ///
    /// Never fails: a gateway error, an empty reply, or empty input yields
    /// [`SUMMARY_FAILURE_PLACEHOLDER`].
    pub async fn summarize(&self, explanations: &[String]) -> String {
        if explanations.is_empty() {
            warn!("No explanations to summarize");
            return SUMMARY_FAILURE_PLACEHOLDER.to_string();
        }

        info!("Summarizing {} explanations", explanations.len());
        let request = ModelRequest::summary(explanations);

        match self.gateway.ask(&request).await {
            Ok(summary) if !summary.trim().is_empty() => {
                debug!("Summary received ({} chars)", summary.len());
                summary
            }
            Ok(_) => {
                warn!("Summary reply was empty");
                SUMMARY_FAILURE_PLACEHOLDER.to_string()
            }
            Err(e) => {
                warn!("Summary request failed: {}", e);
                SUMMARY_FAILURE_PLACEHOLDER.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_gateway::GatewayError;
    use crate::use_cases::testing::ScriptedGateway;
    use hivesight_domain::{ModelVariant, SUMMARY_MAX_TOKENS};

    #[tokio::test]
    async fn test_summary_uses_strongest_model_with_joined_texts() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let summarizer = ExplanationSummarizer::new(Arc::clone(&gateway));

        let summary = summarizer
            .summarize(&["yes, because X".to_string(), "no, because Y".to_string()])
            .await;

        assert_eq!(summary, "summary of explanations");
        let requests = gateway.summary_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, ModelVariant::Strongest);
        assert_eq!(requests[0].max_tokens, SUMMARY_MAX_TOKENS);
        assert!(requests[0].prompt.contains("yes, because X\nno, because Y"));
    }

    #[tokio::test]
    async fn test_gateway_failure_yields_placeholder() {
        let gateway = Arc::new(
            ScriptedGateway::new(vec![])
                .with_summary(Err(GatewayError::RequestFailed("HTTP 500".to_string()))),
        );
        let summarizer = ExplanationSummarizer::new(gateway);

        let summary = summarizer.summarize(&["yes".to_string()]).await;
        assert_eq!(summary, SUMMARY_FAILURE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_empty_reply_yields_placeholder() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]).with_summary(Ok("   ".to_string())));
        let summarizer = ExplanationSummarizer::new(gateway);

        let summary = summarizer.summarize(&["no".to_string()]).await;
        assert_eq!(summary, SUMMARY_FAILURE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_call() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let summarizer = ExplanationSummarizer::new(Arc::clone(&gateway));

        let summary = summarizer.summarize(&[]).await;
        assert_eq!(summary, SUMMARY_FAILURE_PLACEHOLDER);
        assert!(gateway.requests().is_empty());
    }
}
