//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod providers;
mod sampling;

pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileAnthropicModelsConfig, FileProvidersConfig};
pub use sampling::FileSamplingConfig;

use hivesight_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Sampling defaults (model, sample size, explanation mode, dispatch mode)
    pub sampling: FileSamplingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Model service settings
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Unknown enum values are warnings (a default is used); out-of-range
    /// numbers and empty required values are errors.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.sampling.parse_model().1);
        issues.extend(self.sampling.parse_samples().1);
        issues.extend(self.sampling.parse_mode().1);
        issues.extend(self.providers.anthropic.validate());

        issues
    }
}
