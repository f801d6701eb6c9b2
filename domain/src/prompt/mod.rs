//! Prompt construction for sample and summary queries

mod request;
mod template;

pub use request::{ModelRequest, SAMPLE_MAX_TOKENS, SUMMARY_MAX_TOKENS};
pub use template::PromptTemplate;
