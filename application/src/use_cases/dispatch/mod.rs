//! Sample dispatch
//!
//! A [`SampleDispatcher`] issues the N sample queries of a run and returns
//! one [`RawOutcome`] per query, in query order. Two implementations exist:
//!
//! | Dispatcher | In flight | Per-query progress |
//! |------------|-----------|--------------------|
//! | [`SequentialDispatcher`] | 1 | yes |
//! | [`ParallelDispatcher`] | N | no |
//!
//! A failed query never aborts the batch; it is recorded as a failure
//! outcome at its index.

mod parallel;
mod sequential;

pub use parallel::ParallelDispatcher;
pub use sequential::SequentialDispatcher;

use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use hivesight_domain::{DispatchMode, QueryConfig, Question, RawOutcome};

/// Issues all queries of one run
#[async_trait]
pub trait SampleDispatcher: Send + Sync {
    /// Which dispatch mode this implementation provides
    fn mode(&self) -> DispatchMode;

    /// Issue `config.sample_size` queries and return their outcomes in
    /// query order. The returned vector always has exactly that length.
    async fn dispatch(
        &self,
        question: &Question,
        config: &QueryConfig,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RawOutcome>;
}
