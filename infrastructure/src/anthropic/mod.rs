//! Anthropic Messages API adapter
//!
//! Implements the [`ModelGateway`](hivesight_application::ModelGateway) port
//! over plain HTTPS with an API key.

mod error;
mod gateway;
mod model_map;
mod types;

pub use error::AnthropicError;
pub use gateway::{AnthropicGateway, AnthropicSettings, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use model_map::{
    DEFAULT_BALANCED_MODEL, DEFAULT_FAST_MODEL, DEFAULT_STRONGEST_MODEL, ModelMap,
};
