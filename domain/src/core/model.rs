//! Model variant value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Model tier a sample is drawn from (Value Object)
///
/// The concrete backend identifier for each tier is resolved by the
/// gateway adapter; the domain only knows the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    /// Cheapest and quickest tier (default)
    #[default]
    Fast,
    /// Middle tier
    Balanced,
    /// Most capable tier, also used for summarization
    Strongest,
}

impl ModelVariant {
    /// All variants, cheapest first
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::Fast,
        ModelVariant::Balanced,
        ModelVariant::Strongest,
    ];

    /// Get the string identifier for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Fast => "fast",
            ModelVariant::Balanced => "balanced",
            ModelVariant::Strongest => "strongest",
        }
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" | "haiku" => Ok(ModelVariant::Fast),
            "balanced" | "sonnet" => Ok(ModelVariant::Balanced),
            "strongest" | "opus" => Ok(ModelVariant::Strongest),
            other => Err(DomainError::InvalidModel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_roundtrip() {
        for variant in ModelVariant::ALL {
            let parsed: ModelVariant = variant.to_string().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_family_aliases() {
        assert_eq!("Haiku".parse::<ModelVariant>().unwrap(), ModelVariant::Fast);
        assert_eq!("sonnet".parse::<ModelVariant>().unwrap(), ModelVariant::Balanced);
        assert_eq!("OPUS".parse::<ModelVariant>().unwrap(), ModelVariant::Strongest);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = "gigantic".parse::<ModelVariant>().unwrap_err();
        assert_eq!(err, DomainError::InvalidModel("gigantic".to_string()));
    }

    #[test]
    fn test_default_is_fast() {
        assert_eq!(ModelVariant::default(), ModelVariant::Fast);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&ModelVariant::Strongest).unwrap();
        assert_eq!(json, "\"strongest\"");
    }
}
