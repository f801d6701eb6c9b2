//! Sampling configuration from TOML (`[sampling]` section)

use hivesight_domain::{
    ConfigIssue, ConfigIssueCode, DispatchMode, MAX_SAMPLE_SIZE, ModelVariant, QueryConfig,
    SampleSize, Severity,
};
use serde::{Deserialize, Serialize};

/// Raw sampling configuration from TOML
///
/// # Example
///
/// ```toml
/// [sampling]
/// model = "fast"        # fast | balanced | strongest
/// samples = 10          # 1..=100
/// explain = false
/// mode = "sequential"   # sequential | parallel
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSamplingConfig {
    pub model: String,
    pub samples: usize,
    pub explain: bool,
    pub mode: String,
}

impl Default for FileSamplingConfig {
    fn default() -> Self {
        Self {
            model: ModelVariant::default().as_str().to_string(),
            samples: SampleSize::default().get(),
            explain: false,
            mode: DispatchMode::default().as_str().to_string(),
        }
    }
}

impl FileSamplingConfig {
    /// Parse model string into ModelVariant
    ///
    /// Accepts: "fast"/"haiku", "balanced"/"sonnet", "strongest"/"opus"
    pub fn parse_model(&self) -> (ModelVariant, Vec<ConfigIssue>) {
        match self.model.parse::<ModelVariant>() {
            Ok(model) => (model, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "sampling.model".to_string(),
                        value: self.model.clone(),
                        valid_values: ModelVariant::ALL
                            .iter()
                            .map(|m| m.as_str().to_string())
                            .collect(),
                    },
                    message: format!(
                        "sampling.model: unknown value '{}', falling back to '{}'",
                        self.model,
                        ModelVariant::default()
                    ),
                };
                (ModelVariant::default(), vec![issue])
            }
        }
    }

    /// Parse mode string into DispatchMode
    pub fn parse_mode(&self) -> (DispatchMode, Vec<ConfigIssue>) {
        match self.mode.parse::<DispatchMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "sampling.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["sequential".to_string(), "parallel".to_string()],
                    },
                    message: format!(
                        "sampling.mode: unknown value '{}', falling back to '{}'",
                        self.mode,
                        DispatchMode::default()
                    ),
                };
                (DispatchMode::default(), vec![issue])
            }
        }
    }

    /// Parse sample count into SampleSize
    pub fn parse_samples(&self) -> (SampleSize, Vec<ConfigIssue>) {
        match SampleSize::new(self.samples) {
            Ok(size) => (size, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::OutOfRange {
                        field: "sampling.samples".to_string(),
                        value: self.samples.to_string(),
                    },
                    message: format!(
                        "sampling.samples: {} is outside 1..={}",
                        self.samples, MAX_SAMPLE_SIZE
                    ),
                };
                (SampleSize::default(), vec![issue])
            }
        }
    }

    /// Build the per-run query configuration, collecting every issue
    pub fn to_query_config(&self) -> (QueryConfig, Vec<ConfigIssue>) {
        let (model, mut issues) = self.parse_model();
        let (samples, sample_issues) = self.parse_samples();
        issues.extend(sample_issues);

        let config = QueryConfig::new(model, samples).with_explanation(self.explain);
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let config = FileSamplingConfig::default();
        let (query, issues) = config.to_query_config();
        assert!(issues.is_empty());
        assert_eq!(query, QueryConfig::default());
        assert_eq!(config.parse_mode().0, DispatchMode::Sequential);
    }

    #[test]
    fn test_aliases() {
        let config = FileSamplingConfig {
            model: "opus".to_string(),
            mode: "async".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_model().0, ModelVariant::Strongest);
        assert_eq!(config.parse_mode().0, DispatchMode::Parallel);
    }

    #[test]
    fn test_unknown_model_warns_and_falls_back() {
        let config = FileSamplingConfig {
            model: "gpt-4".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, ModelVariant::Fast);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "sampling.model"
        ));
    }

    #[test]
    fn test_sample_count_out_of_range_is_error() {
        for samples in [0, MAX_SAMPLE_SIZE + 1] {
            let config = FileSamplingConfig {
                samples,
                ..Default::default()
            };
            let (_, issues) = config.to_query_config();
            assert_eq!(issues.len(), 1);
            assert!(issues[0].is_error());
        }
    }
}
