//! One query at a time, with progress after each

use super::SampleDispatcher;
use crate::ports::model_gateway::{ModelGateway, into_raw_outcome};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use hivesight_domain::{DispatchMode, ModelRequest, QueryConfig, Question, RawOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dispatcher that awaits each query before issuing the next
pub struct SequentialDispatcher<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> SequentialDispatcher<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: ModelGateway + 'static> SampleDispatcher for SequentialDispatcher<G> {
    fn mode(&self) -> DispatchMode {
        DispatchMode::Sequential
    }

    async fn dispatch(
        &self,
        question: &Question,
        config: &QueryConfig,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RawOutcome> {
        let total = config.sample_size.get();
        let request = ModelRequest::sample_query(question, config);

        info!("Dispatching {} queries sequentially", total);
        progress.on_sampling_start(self.mode(), total);

        let mut outcomes = Vec::with_capacity(total);
        for index in 0..total {
            let outcome = into_raw_outcome(self.gateway.ask(&request).await);
            match &outcome {
                RawOutcome::Text(_) => debug!(index, "Query completed"),
                RawOutcome::Failure(reason) => warn!(index, "Query failed: {}", reason),
            }

            progress.on_query_complete(index + 1, total, !outcome.is_failure());
            outcomes.push(outcome);
        }

        progress.on_sampling_complete(total);
        outcomes
    }
}
