//! Model gateway port
//!
//! Defines the interface for sending one request to the model service.

use async_trait::async_trait;
use hivesight_domain::{FailureReason, ModelRequest, RawOutcome};
use thiserror::Error;

/// Errors that can occur during a gateway call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Returns `true` if the service answered but not in the expected shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, GatewayError::MalformedResponse(_))
    }
}

impl From<GatewayError> for FailureReason {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::MalformedResponse(message) => FailureReason::malformed(message),
            other => FailureReason::transport(other.to_string()),
        }
    }
}

/// Convert a gateway result into the outcome recorded for one query.
pub fn into_raw_outcome(result: Result<String, GatewayError>) -> RawOutcome {
    match result {
        Ok(text) => RawOutcome::Text(text),
        Err(error) => RawOutcome::Failure(error.into()),
    }
}

/// Gateway to the model service
///
/// One call is one attempt: implementations do not retry. Every failure,
/// including an unexpected response shape, comes back as a `GatewayError`.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send a request and return the reply text
    async fn ask(&self, request: &ModelRequest) -> Result<String, GatewayError>;
}
