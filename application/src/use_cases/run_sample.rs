//! Run Sample use case
//!
//! Asks one yes/no question N times, classifies every reply, aggregates the
//! verdicts and, in explanation mode, summarizes the accepted explanations.

use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::dispatch::{ParallelDispatcher, SampleDispatcher, SequentialDispatcher};
use crate::use_cases::summarize::ExplanationSummarizer;
use hivesight_domain::{
    ClassifiedOutcome, DispatchMode, QueryConfig, Question, SUMMARY_FAILURE_PLACEHOLDER,
    SampleReport, classify,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the RunSample use case
#[derive(Debug, Clone)]
pub struct RunSampleInput {
    /// The yes/no question to ask
    pub question: Question,
    /// Model, sample size and explanation mode
    pub config: QueryConfig,
    /// How the queries are dispatched
    pub mode: DispatchMode,
}

impl RunSampleInput {
    pub fn new(question: Question, config: QueryConfig) -> Self {
        Self {
            question,
            config,
            mode: DispatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Use case for running one sample
///
/// Per-query failures never abort the run: they are counted as invalid and
/// reported alongside the estimate.
pub struct RunSampleUseCase<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> RunSampleUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Dispatcher for the given mode
    pub fn dispatcher(&self, mode: DispatchMode) -> Box<dyn SampleDispatcher> {
        match mode {
            DispatchMode::Sequential => {
                Box::new(SequentialDispatcher::new(Arc::clone(&self.gateway)))
            }
            DispatchMode::Parallel => Box::new(ParallelDispatcher::new(Arc::clone(&self.gateway))),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunSampleInput) -> SampleReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSampleInput,
        progress: &dyn ProgressNotifier,
    ) -> SampleReport {
        let dispatcher = self.dispatcher(input.mode);
        self.execute_with_dispatcher(input, dispatcher.as_ref(), progress)
            .await
    }

    /// Execute the use case with an explicit dispatcher
    pub async fn execute_with_dispatcher(
        &self,
        input: RunSampleInput,
        dispatcher: &dyn SampleDispatcher,
        progress: &dyn ProgressNotifier,
    ) -> SampleReport {
        let RunSampleInput {
            question, config, ..
        } = input;

        info!(
            "Sampling {} ({} x {}, explain: {})",
            config.model,
            config.sample_size,
            dispatcher.mode(),
            config.request_explanation
        );

        let outcomes = dispatcher.dispatch(&question, &config, progress).await;
        let classified: Vec<ClassifiedOutcome> = outcomes
            .iter()
            .map(|outcome| classify(outcome, config.request_explanation))
            .collect();

        let report = SampleReport::new(
            question.content(),
            &config,
            dispatcher.mode(),
            &classified,
        );
        debug!(
            "Aggregated {} yes / {} no / {} invalid",
            report.result.yes_count, report.result.no_count, report.result.invalid_count
        );

        if !config.request_explanation || !report.has_valid_responses() {
            return report;
        }

        let explanations: Vec<String> = classified
            .iter()
            .filter(|c| c.is_valid())
            .map(|c| c.text.clone())
            .collect();

        progress.on_summary_start();
        let summary = ExplanationSummarizer::new(Arc::clone(&self.gateway))
            .summarize(&explanations)
            .await;
        progress.on_summary_complete(summary != SUMMARY_FAILURE_PLACEHOLDER);

        report.with_summary(summary)
    }
}
