//! Reply classification.
//!
//! Pure text rules that turn a model reply into a [`Verdict`]. Matching is
//! case-insensitive and ignores surrounding whitespace; the stored text
//! keeps its original casing.
//!
//! | Mode | Valid when |
//! |------|------------|
//! | terse | the whole reply is `yes` or `no` |
//! | explanation | the reply begins with the word `yes` or `no` |
//!
//! In explanation mode the verdict word must end at a word boundary, so
//! `"yesterday ..."` and `"nothing ..."` are invalid while `"Yes, because"`
//! and `"No."` are accepted.

use super::outcome::{ClassifiedOutcome, RawOutcome, Verdict};

const YES: &str = "yes";
const NO: &str = "no";

/// Classify a raw outcome.
///
/// Failures are always [`Verdict::Invalid`] with empty text.
pub fn classify(outcome: &RawOutcome, explanation_mode: bool) -> ClassifiedOutcome {
    match outcome {
        RawOutcome::Text(text) => ClassifiedOutcome {
            verdict: parse_verdict(text, explanation_mode),
            text: text.clone(),
            failure: None,
        },
        RawOutcome::Failure(reason) => ClassifiedOutcome {
            verdict: Verdict::Invalid,
            text: String::new(),
            failure: Some(reason.clone()),
        },
    }
}

/// Read the verdict out of a reply text.
pub fn parse_verdict(text: &str, explanation_mode: bool) -> Verdict {
    let normalized = text.trim().to_lowercase();

    if explanation_mode {
        if starts_with_word(&normalized, YES) {
            Verdict::Yes
        } else if starts_with_word(&normalized, NO) {
            Verdict::No
        } else {
            Verdict::Invalid
        }
    } else {
        match normalized.as_str() {
            YES => Verdict::Yes,
            NO => Verdict::No,
            _ => Verdict::Invalid,
        }
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    match text.strip_prefix(word) {
        Some(rest) => rest.chars().next().is_none_or(|c| !c.is_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::outcome::FailureReason;

    #[test]
    fn test_terse_exact_match() {
        assert_eq!(parse_verdict("yes", false), Verdict::Yes);
        assert_eq!(parse_verdict("no", false), Verdict::No);
        assert_eq!(parse_verdict("YES", false), Verdict::Yes);
        assert_eq!(parse_verdict("  No \n", false), Verdict::No);
    }

    #[test]
    fn test_terse_rejects_anything_else() {
        assert_eq!(parse_verdict("maybe", false), Verdict::Invalid);
        assert_eq!(parse_verdict("yes.", false), Verdict::Invalid);
        assert_eq!(parse_verdict("yes, because", false), Verdict::Invalid);
        assert_eq!(parse_verdict("", false), Verdict::Invalid);
    }

    #[test]
    fn test_explanation_prefix_match() {
        assert_eq!(parse_verdict("yes, because X", true), Verdict::Yes);
        assert_eq!(parse_verdict("No. The reason is Y", true), Verdict::No);
        assert_eq!(parse_verdict("Yes\n\nExplanation...", true), Verdict::Yes);
        assert_eq!(parse_verdict("no", true), Verdict::No);
    }

    #[test]
    fn test_explanation_requires_word_boundary() {
        assert_eq!(parse_verdict("Yesterday it rained", true), Verdict::Invalid);
        assert_eq!(parse_verdict("Nothing is certain", true), Verdict::Invalid);
        assert_eq!(parse_verdict("Not really", true), Verdict::Invalid);
    }

    #[test]
    fn test_explanation_rejects_other_leading_tokens() {
        assert_eq!(parse_verdict("Maybe yes", true), Verdict::Invalid);
        assert_eq!(parse_verdict("I think yes", true), Verdict::Invalid);
    }

    #[test]
    fn test_classify_preserves_original_casing() {
        let classified = classify(&RawOutcome::text("YES"), false);
        assert_eq!(classified.verdict, Verdict::Yes);
        assert_eq!(classified.text, "YES");
        assert!(classified.failure.is_none());
    }

    #[test]
    fn test_classify_failure_is_invalid_with_empty_text() {
        let reason = FailureReason::transport("timed out");
        let classified = classify(&RawOutcome::failure(reason.clone()), true);
        assert_eq!(classified.verdict, Verdict::Invalid);
        assert!(classified.text.is_empty());
        assert_eq!(classified.failure, Some(reason));
    }

    #[test]
    fn test_classify_is_pure() {
        let inputs = [
            RawOutcome::text("yes"),
            RawOutcome::text("No, never"),
            RawOutcome::text("perhaps"),
            RawOutcome::failure(FailureReason::malformed("no text block")),
        ];
        for mode in [false, true] {
            for input in &inputs {
                let first = classify(input, mode);
                for _ in 0..5 {
                    assert_eq!(classify(input, mode), first);
                }
            }
        }
    }
}
