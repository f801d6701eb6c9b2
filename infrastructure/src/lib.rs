//! Infrastructure layer for hivesight
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anthropic;
pub mod config;

// Re-export commonly used types
pub use anthropic::{AnthropicError, AnthropicGateway, AnthropicSettings, ModelMap};
pub use config::{
    ConfigLoader, FileAnthropicConfig, FileAnthropicModelsConfig, FileConfig, FileOutputConfig,
    FileProvidersConfig, FileSamplingConfig,
};
