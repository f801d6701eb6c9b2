//! CLI command definitions

use clap::{Parser, ValueEnum};
use hivesight_domain::{DispatchMode, ModelVariant, OutputFormat as ReportFormat, SampleSize};
use std::path::PathBuf;

/// Model variant to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// Fastest, cheapest model
    #[value(alias = "haiku")]
    Fast,
    /// Mid-tier model
    #[value(alias = "sonnet")]
    Balanced,
    /// Most capable model
    #[value(alias = "opus")]
    Strongest,
}

impl From<ModelChoice> for ModelVariant {
    fn from(choice: ModelChoice) -> Self {
        match choice {
            ModelChoice::Fast => ModelVariant::Fast,
            ModelChoice::Balanced => ModelVariant::Balanced,
            ModelChoice::Strongest => ModelVariant::Strongest,
        }
    }
}

/// How the sample queries are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeChoice {
    /// One query at a time, with a progress bar
    #[value(alias = "seq")]
    Sequential,
    /// All queries at once
    #[value(alias = "par")]
    Parallel,
}

impl From<ModeChoice> for DispatchMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Sequential => DispatchMode::Sequential,
            ModeChoice::Parallel => DispatchMode::Parallel,
        }
    }
}

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Full,
    /// JSON report with every raw response
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => ReportFormat::Full,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn parse_sample_size(s: &str) -> Result<SampleSize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    SampleSize::new(n).map_err(|e| e.to_string())
}

/// CLI arguments for hivesight
#[derive(Parser, Debug)]
#[command(name = "hivesight")]
#[command(
    author,
    version,
    about = "Ask a model the same yes/no question many times and estimate how often it says yes"
)]
#[command(long_about = r#"
HiveSight asks a language model one yes/no question N times and reports the
share of "yes" answers with a 95% credible interval (Beta posterior with a
uniform prior). Replies that are not a clear yes or no are counted as invalid.

With --explain the model is asked to justify each answer, and the accepted
explanations are summarized by the strongest model.

Configuration files are loaded from (in priority order):
1. HIVESIGHT_* environment variables (e.g. HIVESIGHT_SAMPLING__SAMPLES=20)
2. --config <path>        Explicit config file
3. ./hivesight.toml       Project-level config
4. ~/.config/hivesight/config.toml   Global config

The API key is read from ANTHROPIC_API_KEY by default.

Example:
  hivesight "Is a hot dog a sandwich?"
  hivesight -m fast -n 50 "Will it rain in London tomorrow?"
  hivesight -e -n 20 --export responses.csv "Is Pluto a planet?"
  hivesight --no-explain --mode parallel "Is water wet?"
"#)]
pub struct Cli {
    /// The yes/no question to ask
    pub question: Option<String>,

    /// Model variant to query
    #[arg(short, long, value_enum)]
    pub model: Option<ModelChoice>,

    /// Number of times to ask the question (1-100)
    #[arg(short = 'n', long, value_name = "N", value_parser = parse_sample_size)]
    pub samples: Option<SampleSize>,

    /// Ask the model to explain each answer and summarize the explanations
    #[arg(short, long, overrides_with = "no_explain")]
    pub explain: bool,

    /// Ask for bare yes/no answers even if the config enables explanations
    #[arg(long, overrides_with = "explain")]
    pub no_explain: bool,

    /// How queries are dispatched
    #[arg(long, value_enum)]
    pub mode: Option<ModeChoice>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the raw responses to a CSV file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print progress as plain lines instead of a progress bar
    #[arg(long, conflicts_with = "quiet")]
    pub plain_progress: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Explanation mode requested on the command line, if any.
    ///
    /// `None` leaves the configured value in place.
    pub fn explain_override(&self) -> Option<bool> {
        match (self.explain, self.no_explain) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Whether progress should be printed as plain lines
    pub fn use_plain_progress(&self, stderr_is_terminal: bool) -> bool {
        self.plain_progress || !stderr_is_terminal
    }
}
