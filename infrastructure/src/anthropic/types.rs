//! Wire types for the Messages API

use hivesight_domain::ModelRequest;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    /// Single-turn user message for the given backend model
    pub fn single_turn(model_id: &'a str, request: &'a ModelRequest) -> Self {
        Self {
            model: model_id,
            max_tokens: request.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    /// Text of the first content block.
    ///
    /// Err carries a description of the unexpected shape.
    pub fn first_text(&self) -> Result<&str, String> {
        match self.content.first() {
            None => Err("response has no content blocks".to_string()),
            Some(ContentBlock::Text { text }) => Ok(text),
            Some(ContentBlock::Other) => Err("first content block is not text".to_string()),
        }
    }
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}
