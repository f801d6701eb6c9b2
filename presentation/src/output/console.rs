//! Console output formatter for sampling reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use hivesight_domain::SampleReport;

/// Shown instead of an estimate when no reply was a valid yes or no
pub const NO_VALID_RESPONSES: &str = "No valid responses received.";

/// Formats sampling reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &SampleReport) -> String {
        let mut output = String::new();
        let result = &report.result;

        // Header
        output.push_str(&Self::header("HiveSight Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            report.question
        ));
        output.push_str(&format!(
            "{} {} ({} queries, {})\n",
            "Model:".cyan().bold(),
            report.model,
            result.total,
            report.dispatch_mode
        ));

        // Counts
        output.push_str(&Self::section_header("Responses"));
        output.push_str(&format!("  {:<10}{}\n", "yes", result.yes_count));
        output.push_str(&format!("  {:<10}{}\n", "no", result.no_count));
        output.push_str(&format!("  {:<10}{}", "invalid", result.invalid_count));
        if result.failed_count > 0 {
            output.push_str(&format!(
                " {}",
                format!("({} failed)", result.failed_count).red()
            ));
        }
        output.push('\n');

        // Estimate
        output.push_str(&Self::section_header("Estimate"));
        match Self::headline(report) {
            Some(headline) => output.push_str(&format!("{}\n", headline.green().bold())),
            None => output.push_str(&format!("{}\n", NO_VALID_RESPONSES.red().bold())),
        }

        // Explanation summary
        if let Some(summary) = &report.explanation_summary {
            output.push_str(&Self::section_header("Summary of Explanations"));
            if report.summary_failed() {
                output.push_str(&format!("{}\n", summary.yellow()));
            } else {
                output.push_str(&format!("{}\n", summary));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// One-line verdict, or `None` when there is no estimate
    ///
    /// `Of 4 valid responses, the model said 'yes' 50.0% of the time (95% CI: [18.9%, 81.1%])`
    pub fn headline(report: &SampleReport) -> Option<String> {
        let estimate = report.estimate()?;
        Some(format!(
            "Of {} valid responses, the model said 'yes' {:.1}% of the time ({:.0}% CI: [{:.1}%, {:.1}%])",
            report.valid_response_count(),
            estimate.yes_percentage,
            estimate.interval.level * 100.0,
            estimate.interval.low,
            estimate.interval.high
        ))
    }

    /// Format as JSON
    pub fn format_json(report: &SampleReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &SampleReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &SampleReport) -> String {
        Self::format_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hivesight_domain::{
        DispatchMode, FailureReason, ModelVariant, QueryConfig, RawOutcome, SampleSize, classify,
    };

    fn report(outcomes: &[RawOutcome], explain: bool) -> SampleReport {
        let config = QueryConfig::new(
            ModelVariant::Balanced,
            SampleSize::new(outcomes.len()).unwrap(),
        )
        .with_explanation(explain);
        let classified: Vec<_> = outcomes.iter().map(|o| classify(o, explain)).collect();
        SampleReport::new(
            "Is it?",
            &config,
            DispatchMode::Parallel,
            &classified,
        )
    }

    #[test]
    fn test_headline_for_even_split() {
        let report = report(
            &[
                RawOutcome::text("yes"),
                RawOutcome::text("no"),
                RawOutcome::text("maybe"),
                RawOutcome::text("YES"),
                RawOutcome::text("no"),
            ],
            false,
        );
        let headline = ConsoleFormatter::headline(&report).unwrap();
        assert!(headline.starts_with("Of 4 valid responses, the model said 'yes' 50.0% of the time"));
        assert!(headline.contains("(95% CI: ["));
    }

    #[test]
    fn test_no_valid_responses_message() {
        let report = report(
            &[
                RawOutcome::failure(FailureReason::transport("refused")),
                RawOutcome::text("perhaps"),
            ],
            false,
        );
        assert!(ConsoleFormatter::headline(&report).is_none());

        let output = ConsoleFormatter::format(&report);
        assert!(output.contains(NO_VALID_RESPONSES));
        assert!(output.contains("(1 failed)"));
    }

    #[test]
    fn test_summary_section_only_when_present() {
        let plain = report(&[RawOutcome::text("yes, because")], true);
        assert!(!ConsoleFormatter::format(&plain).contains("Summary of Explanations"));

        let summarized = plain.with_summary("Mostly agreed.");
        let output = ConsoleFormatter::format(&summarized);
        assert!(output.contains("Summary of Explanations"));
        assert!(output.contains("Mostly agreed."));
    }

    #[test]
    fn test_json_contains_counts_and_responses() {
        let report = report(
            &[
                RawOutcome::text("yes"),
                RawOutcome::failure(FailureReason::malformed("no text block")),
            ],
            false,
        );
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();

        assert_eq!(json["question"], "Is it?");
        assert_eq!(json["result"]["yes_count"], 1);
        assert_eq!(json["result"]["invalid_count"], 1);
        assert_eq!(json["responses"][0]["text"], "yes");
        assert_eq!(json["responses"][1]["was_valid"], false);
        assert!(json["responses"][1]["error"].is_string());
        assert!(json.get("explanation_summary").is_none());
    }
}
