//! Inference over a classified sample.
//!
//! Counts verdicts and, when at least one reply is valid, estimates the
//! probability of "yes" together with a credible interval from the
//! Beta(yes + 1, no + 1) posterior. The add-one smoothing keeps both shape
//! parameters at 1 or above, so the interval stays strictly inside
//! (0, 100) even for unanimous samples.

use super::outcome::{ClassifiedOutcome, Verdict};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};

/// Two-sided coverage of the reported interval
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Interval bounds expressed as percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
    /// Coverage as a fraction (0.95 for a 95% interval)
    pub level: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, percentage: f64) -> bool {
        (self.low..=self.high).contains(&percentage)
    }
}

/// Point estimate and interval for the yes-probability, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub yes_percentage: f64,
    pub interval: ConfidenceInterval,
}

/// Aggregated counts and statistics for one sample
///
/// `yes_count + no_count + invalid_count == total` always holds.
/// `failed_count` is the part of `invalid_count` caused by gateway failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    pub total: usize,
    pub yes_count: usize,
    pub no_count: usize,
    pub invalid_count: usize,
    pub failed_count: usize,
    /// `None` when there are no valid responses
    pub estimate: Option<Estimate>,
}

impl SampleResult {
    /// Fold classified outcomes into counts and statistics.
    ///
    /// The result depends only on the multiset of verdicts, not their order.
    pub fn aggregate(classified: &[ClassifiedOutcome]) -> Self {
        let mut yes_count = 0;
        let mut no_count = 0;
        let mut invalid_count = 0;
        let mut failed_count = 0;

        for outcome in classified {
            match outcome.verdict {
                Verdict::Yes => yes_count += 1,
                Verdict::No => no_count += 1,
                Verdict::Invalid => invalid_count += 1,
            }
            if outcome.is_failure() {
                failed_count += 1;
            }
        }

        Self {
            total: classified.len(),
            yes_count,
            no_count,
            invalid_count,
            failed_count,
            estimate: estimate(yes_count, no_count),
        }
    }

    /// Number of Yes + No replies
    pub fn valid_count(&self) -> usize {
        self.yes_count + self.no_count
    }

    pub fn has_valid_responses(&self) -> bool {
        self.valid_count() > 0
    }

    /// Replies that arrived but did not follow the yes/no format
    pub fn unparseable_count(&self) -> usize {
        self.invalid_count - self.failed_count
    }
}

/// Estimate the yes-probability from verdict counts.
///
/// Returns `None` when `yes + no == 0`.
pub fn estimate(yes: usize, no: usize) -> Option<Estimate> {
    let valid = yes + no;
    if valid == 0 {
        return None;
    }

    let interval = posterior_interval(yes, no, CONFIDENCE_LEVEL)?;
    Some(Estimate {
        yes_percentage: yes as f64 / valid as f64 * 100.0,
        interval,
    })
}

/// Equal-tailed credible interval of Beta(yes + 1, no + 1), in percent.
pub fn posterior_interval(yes: usize, no: usize, level: f64) -> Option<ConfidenceInterval> {
    let posterior = Beta::new(yes as f64 + 1.0, no as f64 + 1.0).ok()?;
    let tail = (1.0 - level) / 2.0;

    Some(ConfidenceInterval {
        low: posterior.inverse_cdf(tail) * 100.0,
        high: posterior.inverse_cdf(1.0 - tail) * 100.0,
        level,
    })
}
