//! All queries in flight at once

use super::SampleDispatcher;
use crate::ports::model_gateway::{ModelGateway, into_raw_outcome};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use hivesight_domain::{
    DispatchMode, FailureReason, ModelRequest, QueryConfig, Question, RawOutcome,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Dispatcher that spawns one task per query and joins them all
///
/// Each task yields `(index, outcome)`; outcomes are written into a buffer
/// of N slots and read back in index order, so completion order never
/// reorders the sample.
pub struct ParallelDispatcher<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> ParallelDispatcher<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: ModelGateway + 'static> SampleDispatcher for ParallelDispatcher<G> {
    fn mode(&self) -> DispatchMode {
        DispatchMode::Parallel
    }

    async fn dispatch(
        &self,
        question: &Question,
        config: &QueryConfig,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RawOutcome> {
        let total = config.sample_size.get();
        let request = ModelRequest::sample_query(question, config);

        info!("Dispatching {} queries in parallel", total);
        progress.on_sampling_start(self.mode(), total);

        let mut join_set = JoinSet::new();
        for index in 0..total {
            let gateway = Arc::clone(&self.gateway);
            let request = request.clone();

            join_set.spawn(async move {
                let outcome = into_raw_outcome(gateway.ask(&request).await);
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<RawOutcome>> = vec![None; total];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    match &outcome {
                        RawOutcome::Text(_) => debug!(index, "Query completed"),
                        RawOutcome::Failure(reason) => warn!(index, "Query failed: {}", reason),
                    }
                    slots[index] = Some(outcome);
                }
                Err(e) => {
                    warn!("Query task join error: {}", e);
                }
            }
        }

        progress.on_sampling_complete(total);

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    RawOutcome::failure(FailureReason::transport("query task did not complete"))
                })
            })
            .collect()
    }
}
