//! Outcome value objects for a single query
//!
//! - [`RawOutcome`] - what the gateway returned for one query
//! - [`Verdict`] - the ternary reading of a reply
//! - [`ClassifiedOutcome`] - a raw outcome paired with its verdict

use serde::{Deserialize, Serialize};

/// Why a query produced no text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network or protocol error talking to the model service
    Transport,
    /// The service answered, but not in the expected shape
    MalformedResponse,
}

/// A captured failure cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    pub kind: FailureKind,
    pub message: String,
}

impl FailureReason {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::MalformedResponse,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FailureKind::Transport => write!(f, "transport failure: {}", self.message),
            FailureKind::MalformedResponse => write!(f, "malformed response: {}", self.message),
        }
    }
}

/// Result of a single gateway call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawOutcome {
    Text(String),
    Failure(FailureReason),
}

impl RawOutcome {
    pub fn text(text: impl Into<String>) -> Self {
        RawOutcome::Text(text.into())
    }

    pub fn failure(reason: FailureReason) -> Self {
        RawOutcome::Failure(reason)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RawOutcome::Failure(_))
    }
}

/// Ternary classification of one reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
    Invalid,
}

impl Verdict {
    /// `true` for Yes and No
    pub fn is_valid(&self) -> bool {
        !matches!(self, Verdict::Invalid)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
            Verdict::Invalid => "invalid",
        };
        write!(f, "{}", s)
    }
}

/// A raw outcome together with its verdict
///
/// `text` is the reply with its original casing, or empty for a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedOutcome {
    pub verdict: Verdict,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReason>,
}

impl ClassifiedOutcome {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}
