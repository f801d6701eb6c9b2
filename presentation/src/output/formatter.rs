//! Output formatter trait

use hivesight_domain::SampleReport;

/// Trait for formatting sampling reports
pub trait OutputFormatter {
    /// Format the complete report for a terminal
    fn format(&self, report: &SampleReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &SampleReport) -> String;
}
