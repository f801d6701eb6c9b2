//! HTTP gateway to the Anthropic Messages API

use super::error::AnthropicError;
use super::model_map::ModelMap;
use super::types::{ErrorResponse, MessagesRequest, MessagesResponse};
use async_trait::async_trait;
use hivesight_application::ports::model_gateway::{GatewayError, ModelGateway};
use hivesight_domain::ModelRequest;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, trace};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Connection settings for [`AnthropicGateway`]
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    pub models: ModelMap,
}

impl AnthropicSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            models: ModelMap::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_models(mut self, models: ModelMap) -> Self {
        self.models = models;
        self
    }
}

/// [`ModelGateway`] backed by `POST {base_url}/v1/messages`
///
/// Each call is a single-turn user message; the reply is the first content
/// block's text, trimmed. No retries.
#[derive(Debug, Clone)]
pub struct AnthropicGateway {
    client: reqwest::Client,
    base_url: String,
    models: ModelMap,
}

impl AnthropicGateway {
    pub fn new(settings: AnthropicSettings) -> Result<Self, AnthropicError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let api_key = HeaderValue::from_str(&settings.api_key)
            .map_err(|_| AnthropicError::InvalidHeader("x-api-key"))?;
        headers.insert("x-api-key", api_key);

        let version = HeaderValue::from_str(&settings.api_version)
            .map_err(|_| AnthropicError::InvalidHeader("anthropic-version"))?;
        headers.insert("anthropic-version", version);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AnthropicError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            models: settings.models,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

/// Detail for a non-2xx reply: the API error if the body decodes, else the raw body
fn error_detail<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(raw) => match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(body) => format!("{}: {}", body.error.kind, body.error.message),
            Err(_) => raw,
        },
        Err(e) => format!("failed to read error body: {}", e),
    }
}

#[async_trait]
impl ModelGateway for AnthropicGateway {
    async fn ask(&self, request: &ModelRequest) -> Result<String, GatewayError> {
        let model_id = self.models.model_id(request.model);
        let body = MessagesRequest::single_turn(model_id, request);

        debug!(model = model_id, max_tokens = request.max_tokens, "Sending message");
        let response = self
            .client
            .post(self.messages_url())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = error_detail(response.text().await);
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::MalformedResponse(format!("invalid response body: {}", e))
            }
        })?;

        let text = parsed
            .first_text()
            .map_err(GatewayError::MalformedResponse)?
            .trim()
            .to_string();
        trace!(reply = %text, "Received reply");

        Ok(text)
    }
}
