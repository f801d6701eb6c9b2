//! Test doubles shared by the use case tests.

use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use hivesight_domain::{DispatchMode, ModelRequest, SUMMARY_MAX_TOKENS};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Gateway that answers sample queries from a script and summary
/// requests with a fixed reply, recording every request.
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    summary: Result<String, GatewayError>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            summary: Ok("summary of explanations".to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn with_summary(mut self, summary: Result<String, GatewayError>) -> Self {
        self.summary = summary;
        self
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn summary_requests(&self) -> Vec<ModelRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.max_tokens == SUMMARY_MAX_TOKENS)
            .collect()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn ask(&self, request: &ModelRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.max_tokens == SUMMARY_MAX_TOKENS {
            return self.summary.clone();
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more scripted replies".to_string())))
    }
}

/// Gateway whose n-th call sleeps longer the earlier it started, so
/// calls finish in reverse order. Tracks peak concurrency.
pub(crate) struct DelayedGateway {
    total: usize,
    step: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    completions: Mutex<Vec<usize>>,
}

impl DelayedGateway {
    pub fn new(total: usize, step: Duration) -> Self {
        Self {
            total,
            step,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            completions: Mutex::new(Vec::new()),
        }
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn completion_order(&self) -> Vec<usize> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for DelayedGateway {
    async fn ask(&self, _request: &ModelRequest) -> Result<String, GatewayError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let remaining = self.total.saturating_sub(call) as u32;
        tokio::time::sleep(self.step * remaining).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completions.lock().unwrap().push(call);
        Ok(format!("reply-{}", call))
    }
}

/// Gateway that panics on one chosen call and answers "yes" otherwise
pub(crate) struct PanickingGateway {
    panic_on: usize,
    calls: AtomicUsize,
}

impl PanickingGateway {
    pub fn new(panic_on: usize) -> Self {
        Self {
            panic_on,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ModelGateway for PanickingGateway {
    async fn ask(&self, _request: &ModelRequest) -> Result<String, GatewayError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.panic_on {
            panic!("gateway blew up on call {}", call);
        }
        tokio::task::yield_now().await;
        Ok("yes".to_string())
    }
}

/// Progress notifier that records every event
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub started: Mutex<Vec<(DispatchMode, usize)>>,
    pub queries: Mutex<Vec<(usize, usize, bool)>>,
    pub completed: Mutex<Vec<usize>>,
    pub summaries: Mutex<Vec<bool>>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_sampling_start(&self, mode: DispatchMode, total: usize) {
        self.started.lock().unwrap().push((mode, total));
    }

    fn on_query_complete(&self, completed: usize, total: usize, success: bool) {
        self.queries
            .lock()
            .unwrap()
            .push((completed, total, success));
    }

    fn on_sampling_complete(&self, total: usize) {
        self.completed.lock().unwrap().push(total);
    }

    fn on_summary_complete(&self, success: bool) {
        self.summaries.lock().unwrap().push(success);
    }
}
