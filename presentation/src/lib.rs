//! Presentation layer for hivesight
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the CSV exporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeChoice, ModelChoice, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::export::CsvExporter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
