//! CLI entrypoint for HiveSight
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hivesight_application::{ProgressNotifier, RunSampleInput, RunSampleUseCase};
use hivesight_domain::{DispatchMode, ModelVariant, OutputFormat, Question};
use hivesight_infrastructure::{AnthropicGateway, ConfigLoader, FileConfig};
use hivesight_presentation::{
    Cli, ConsoleFormatter, CsvExporter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting HiveSight");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&file_config)?;

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let question = match cli.question.as_deref() {
        Some(q) => Question::new(q)?,
        None => bail!("Question is required. Run with --help for usage."),
    };

    // CLI flags override the merged file config
    let (mut config, _) = file_config.sampling.to_query_config();
    if let Some(model) = cli.model {
        config.model = ModelVariant::from(model);
    }
    if let Some(samples) = cli.samples {
        config.sample_size = samples;
    }
    if let Some(explain) = cli.explain_override() {
        config.request_explanation = explain;
    }

    let mode = cli
        .mode
        .map(DispatchMode::from)
        .unwrap_or_else(|| file_config.sampling.parse_mode().0);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let settings = file_config
        .providers
        .anthropic
        .to_settings()
        .context("Model service credentials are not configured")?;
    let gateway = Arc::new(AnthropicGateway::new(settings)?);
    let use_case = RunSampleUseCase::new(gateway);

    let input = RunSampleInput::new(question, config).with_mode(mode);

    // Execute with or without progress reporting
    let report = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress: Box<dyn ProgressNotifier> =
            if cli.use_plain_progress(std::io::stderr().is_terminal()) {
                Box::new(SimpleProgress::new())
            } else {
                Box::new(ProgressReporter::new())
            };
        use_case
            .execute_with_progress(input, progress.as_ref())
            .await
    };

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", output);

    if let Some(path) = &cli.export {
        CsvExporter::write_to(&report, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Raw responses written to {}", path.display());
    }

    if !report.has_valid_responses() {
        bail!(
            "No valid responses out of {} queries ({} failed)",
            report.result.total,
            report.result.failed_count
        );
    }

    Ok(())
}

/// Log warnings and abort on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = Vec::new();

    for issue in issues {
        if issue.is_error() {
            errors.push(issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
