//! CSV export of raw responses

use hivesight_domain::SampleReport;
use std::fs;
use std::io;
use std::path::Path;

/// Header of the single CSV column
pub const CSV_HEADER: &str = "Response";

/// Writes the raw replies of a report as CSV
///
/// One row per query in query order; failed queries export as an empty
/// cell. Fields are quoted when they contain a comma, quote or line break.
pub struct CsvExporter;

impl CsvExporter {
    pub fn to_csv(report: &SampleReport) -> String {
        let mut csv = String::new();
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        for response in &report.responses {
            csv.push_str(&Self::escape(&response.text));
            csv.push('\n');
        }
        csv
    }

    pub fn to_csv_bytes(report: &SampleReport) -> Vec<u8> {
        Self::to_csv(report).into_bytes()
    }

    pub fn write_to(report: &SampleReport, path: &Path) -> io::Result<()> {
        fs::write(path, Self::to_csv_bytes(report))
    }

    fn escape(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}
