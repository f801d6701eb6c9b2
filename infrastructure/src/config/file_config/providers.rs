//! Provider configuration from TOML (`[providers]` section)

use crate::anthropic::{
    AnthropicError, AnthropicSettings, DEFAULT_API_VERSION, DEFAULT_BASE_URL, ModelMap,
};
use hivesight_domain::{ConfigIssue, ConfigIssueCode, ModelVariant, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend model ID overrides (`[providers.anthropic.models]`)
///
/// ```toml
/// [providers.anthropic.models]
/// fast = "claude-3-5-haiku-latest"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicModelsConfig {
    pub fast: Option<String>,
    pub balanced: Option<String>,
    pub strongest: Option<String>,
}

impl FileAnthropicModelsConfig {
    fn entries(&self) -> [(ModelVariant, Option<&String>); 3] {
        [
            (ModelVariant::Fast, self.fast.as_ref()),
            (ModelVariant::Balanced, self.balanced.as_ref()),
            (ModelVariant::Strongest, self.strongest.as_ref()),
        ]
    }

    /// Default map with the configured overrides applied.
    ///
    /// Empty overrides are ignored (and reported by `validate`).
    pub fn to_model_map(&self) -> ModelMap {
        self.entries()
            .into_iter()
            .fold(ModelMap::default(), |map, (variant, id)| match id {
                Some(id) if !id.trim().is_empty() => map.with_override(variant, id.trim()),
                _ => map,
            })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.entries()
            .into_iter()
            .filter_map(|(variant, id)| match id {
                Some(id) if id.trim().is_empty() => {
                    let field = format!("providers.anthropic.models.{}", variant);
                    Some(ConfigIssue {
                        severity: Severity::Error,
                        message: format!("{}: model ID cannot be empty", field),
                        code: ConfigIssueCode::EmptyValue { field },
                    })
                }
                _ => None,
            })
            .collect()
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Per-request timeout in seconds (unset: transport default).
    pub timeout_seconds: Option<u64>,
    pub models: FileAnthropicModelsConfig,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_seconds: None,
            models: FileAnthropicModelsConfig::default(),
        }
    }
}

impl FileAnthropicConfig {
    /// Resolve the API key: the `api_key_env` variable first, then `api_key`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(&self.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    /// Gateway settings from this section, resolving the API key
    pub fn to_settings(&self) -> Result<AnthropicSettings, AnthropicError> {
        let api_key = self
            .resolve_api_key()
            .ok_or_else(|| AnthropicError::MissingApiKey {
                env: self.api_key_env.clone(),
            })?;
        Ok(self.settings_with_key(api_key))
    }

    fn settings_with_key(&self, api_key: String) -> AnthropicSettings {
        let mut settings = AnthropicSettings::new(api_key)
            .with_base_url(&self.base_url)
            .with_models(self.models.to_model_map());
        settings.api_version = self.api_version.clone();
        if let Some(seconds) = self.timeout_seconds {
            settings = settings.with_timeout(Duration::from_secs(seconds));
        }
        settings
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("providers.anthropic.base_url", &self.base_url),
            ("providers.anthropic.api_version", &self.api_version),
            ("providers.anthropic.api_key_env", &self.api_key_env),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!("{}: cannot be empty", field),
                });
            }
        }

        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "providers.anthropic.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "providers.anthropic.timeout_seconds: cannot be 0".to_string(),
            });
        }

        issues.extend(self.models.validate());
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anthropic::DEFAULT_FAST_MODEL;

    #[test]
    fn test_env_key_wins_over_config_key() {
        let config = FileAnthropicConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|name| {
            assert_eq!(name, "ANTHROPIC_API_KEY");
            Some("sk-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_config_key_used_when_env_missing() {
        let config = FileAnthropicConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_key_with(|_| None).as_deref(),
            Some("sk-file")
        );
        assert_eq!(
            config
                .resolve_api_key_with(|_| Some(String::new()))
                .as_deref(),
            Some("sk-file")
        );
    }

    #[test]
    fn test_no_key_anywhere() {
        let config = FileAnthropicConfig::default();
        assert!(config.resolve_api_key_with(|_| None).is_none());
    }

    #[test]
    fn test_settings_carry_overrides_and_timeout() {
        let config = FileAnthropicConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_seconds: Some(30),
            models: FileAnthropicModelsConfig {
                strongest: Some("claude-opus-4-20250514".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = config.settings_with_key("sk-test".to_string());
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            settings.models.model_id(ModelVariant::Strongest),
            "claude-opus-4-20250514"
        );
        assert_eq!(settings.models.model_id(ModelVariant::Fast), DEFAULT_FAST_MODEL);
    }

    #[test]
    fn test_validate_flags_empty_values() {
        let config = FileAnthropicConfig {
            base_url: " ".to_string(),
            timeout_seconds: Some(0),
            models: FileAnthropicModelsConfig {
                balanced: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyValue { field } if field == "providers.anthropic.models.balanced"
        )));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileAnthropicConfig::default().validate().is_empty());
    }
}
