//! Progress notification port
//!
//! Defines the interface for reporting progress during a sampling run.

use hivesight_domain::DispatchMode;

/// Callback for progress updates during a sampling run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first query is issued
    fn on_sampling_start(&self, mode: DispatchMode, total: usize);

    /// Called after each completed query.
    ///
    /// Only the sequential dispatcher reports per-query progress.
    fn on_query_complete(&self, completed: usize, total: usize, success: bool);

    /// Called once every query has finished
    fn on_sampling_complete(&self, total: usize);

    /// Called before the explanation summary is requested
    fn on_summary_start(&self) {}

    /// Called when the explanation summary is done
    fn on_summary_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_sampling_start(&self, _mode: DispatchMode, _total: usize) {}
    fn on_query_complete(&self, _completed: usize, _total: usize, _success: bool) {}
    fn on_sampling_complete(&self, _total: usize) {}
}
