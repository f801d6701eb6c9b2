//! Errors raised while building the Anthropic adapter

use thiserror::Error;

/// Construction-time errors for [`AnthropicGateway`](super::AnthropicGateway)
///
/// Request-time failures are reported as
/// [`GatewayError`](hivesight_application::GatewayError) instead.
#[derive(Error, Debug)]
pub enum AnthropicError {
    #[error("API key not found: set the {env} environment variable or providers.anthropic.api_key")]
    MissingApiKey { env: String },

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}
