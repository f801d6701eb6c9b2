//! Progress reporting for a sampling run
//!
//! Everything here draws to stderr so stdout stays clean for the report.

use colored::Colorize;
use hivesight_application::ports::progress::ProgressNotifier;
use hivesight_domain::DispatchMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif bar (sequential) or spinner (parallel)
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn replace(&self, bar: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.bar.lock() {
            Ok(mut slot) => std::mem::replace(&mut *slot, bar),
            Err(_) => None,
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                f(bar);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_sampling_start(&self, mode: DispatchMode, total: usize) {
        let bar = match mode {
            DispatchMode::Sequential => {
                let bar = ProgressBar::new(total as u64);
                bar.set_style(Self::bar_style());
                bar.set_message("Starting...");
                bar
            }
            DispatchMode::Parallel => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(Self::spinner_style());
                bar.set_message(format!("Waiting for {} responses", total));
                bar.enable_steady_tick(Duration::from_millis(100));
                bar
            }
        };
        bar.set_prefix("Sampling");

        if let Some(previous) = self.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn on_query_complete(&self, completed: usize, total: usize, success: bool) {
        self.with_bar(|bar| {
            let status = if success {
                format!("{} query {} of {}", "v".green(), completed, total)
            } else {
                format!("{} query {} of {}", "x".red(), completed, total)
            };
            bar.set_message(status);
            bar.inc(1);
        });
    }

    fn on_sampling_complete(&self, total: usize) {
        if let Some(bar) = self.replace(None) {
            bar.finish_with_message(format!("{} {} queries done", "v".green(), total));
        }
    }

    fn on_summary_start(&self) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Summary");
        bar.set_message("Summarizing explanations");
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn on_summary_complete(&self, success: bool) {
        if let Some(bar) = self.replace(None) {
            if success {
                bar.finish_and_clear();
            } else {
                bar.abandon_with_message(format!("{}", "summary failed".yellow()));
            }
        }
    }
}

/// Line-based progress for non-terminal stderr (no fancy UI)
pub struct SimpleProgress<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> SimpleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // Write errors are ignored
    fn line(&self, args: fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", args);
        }
    }
}

impl<W: Write + Send> ProgressNotifier for SimpleProgress<W> {
    fn on_sampling_start(&self, mode: DispatchMode, total: usize) {
        self.line(format_args!(
            "{} {} ({} queries, {})",
            "->".cyan(),
            "Sampling".bold(),
            total,
            mode
        ));
    }

    fn on_query_complete(&self, completed: usize, total: usize, success: bool) {
        if success {
            self.line(format_args!("  {} {}/{}", "v".green(), completed, total));
        } else {
            self.line(format_args!("  {} {}/{} (failed)", "x".red(), completed, total));
        }
    }

    fn on_sampling_complete(&self, total: usize) {
        self.line(format_args!("  {} queries done", total));
    }

    fn on_summary_start(&self) {
        self.line(format_args!("{} {}", "->".cyan(), "Summarizing explanations".bold()));
    }

    fn on_summary_complete(&self, success: bool) {
        if !success {
            self.line(format_args!("  {}", "summary failed".yellow()));
        }
    }
}
