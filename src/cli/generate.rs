//! Generate command for seat chart files.

use crate::cli::common::{CliError, CliResult, InputArgs};
use crate::config::Config;
use crate::constants::DEFAULT_OUTPUT_STEM;
use crate::export::{self, ExportOptions, OutputFormat};
use crate::models::ChartStats;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Merge a layout with seat assignments and write the chart
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output path (defaults to seat_layout_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Title written above the grid
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Print a JSON summary instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

/// JSON summary printed with `--json`.
#[derive(Serialize, Debug)]
struct GenerateSummary {
    output: String,
    format: OutputFormat,
    stats: ChartStats,
    warnings: usize,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let format = self.format.unwrap_or(config.output.format);
        let mut options = ExportOptions::from(&config.output);
        if let Some(title) = &self.title {
            options.title.clone_from(title);
        }

        let chart = self.input.build_chart(&config.input)?;

        let output_path = self.get_output_path(format);
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;
        }

        export::write_chart(&chart, format, &options, &output_path)
            .map_err(|e| CliError::io(format!("Failed to write seat chart: {e:#}")))?;

        if self.json {
            let summary = GenerateSummary {
                output: output_path.to_string_lossy().to_string(),
                format,
                stats: chart.stats,
                warnings: chart.diagnostics.len(),
            };
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::io(format!("Failed to serialize summary: {e}")))?;
            println!("{json}");
        } else {
            let stats = &chart.stats;
            println!("✓ Wrote seat chart to: {}", output_path.display());
            println!(
                "  Seats: {} ({} matched, {} filled)",
                stats.total_seats, stats.matched_seats, stats.filled_seats
            );
            println!(
                "  Groups: {}, Partitions: {}",
                stats.group_count, stats.partition_count
            );
            if !chart.diagnostics.is_empty() {
                println!("  Warnings: {}", chart.diagnostics.len());
            }
        }

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, format: OutputFormat) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!(
            "{DEFAULT_OUTPUT_STEM}_{date}.{}",
            format.extension()
        ))
    }
}
