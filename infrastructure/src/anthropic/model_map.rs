//! Model variant to backend model ID mapping

use hivesight_domain::ModelVariant;

pub const DEFAULT_FAST_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_BALANCED_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_STRONGEST_MODEL: &str = "claude-3-opus-20240229";

/// Backend model identifier for each [`ModelVariant`]
///
/// Defaults to the Claude 3 family; each entry can be overridden from
/// `[providers.anthropic.models]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMap {
    fast: String,
    balanced: String,
    strongest: String,
}

impl Default for ModelMap {
    fn default() -> Self {
        Self {
            fast: DEFAULT_FAST_MODEL.to_string(),
            balanced: DEFAULT_BALANCED_MODEL.to_string(),
            strongest: DEFAULT_STRONGEST_MODEL.to_string(),
        }
    }
}

impl ModelMap {
    /// Replace the model ID used for one variant
    pub fn with_override(mut self, variant: ModelVariant, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        match variant {
            ModelVariant::Fast => self.fast = model_id,
            ModelVariant::Balanced => self.balanced = model_id,
            ModelVariant::Strongest => self.strongest = model_id,
        }
        self
    }

    pub fn model_id(&self, variant: ModelVariant) -> &str {
        match variant {
            ModelVariant::Fast => &self.fast,
            ModelVariant::Balanced => &self.balanced,
            ModelVariant::Strongest => &self.strongest,
        }
    }
}
