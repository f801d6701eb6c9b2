//! Application layer for hivesight
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    model_gateway::{GatewayError, ModelGateway, into_raw_outcome},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::dispatch::{ParallelDispatcher, SampleDispatcher, SequentialDispatcher};
pub use use_cases::run_sample::{RunSampleInput, RunSampleUseCase};
pub use use_cases::summarize::ExplanationSummarizer;
