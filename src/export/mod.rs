//! Output sinks for a merged seat chart.
//!
//! The workbook is the primary output; JSON and markdown render the same
//! [`SeatChart`] for scripting and documentation.

pub mod json;
pub mod markdown;
pub mod xlsx;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::models::SeatChart;

pub use json::render_json;
pub use markdown::render_markdown;
pub use xlsx::write_xlsx;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Excel workbook with layout and legend sheets
    #[default]
    Xlsx,
    /// Machine-readable chart dump
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Presentation settings shared by all sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Title written above the grid
    pub title: String,
    /// Name of the grid sheet
    pub layout_sheet: String,
    /// Name of the legend sheet
    pub legend_sheet: String,
    /// Width of grid columns, in character units
    pub column_width: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for ExportOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            title: config.title.clone(),
            layout_sheet: config.layout_sheet.clone(),
            legend_sheet: config.legend_sheet.clone(),
            column_width: config.column_width,
        }
    }
}

/// Writes the chart to `path` in the requested format.
///
/// The whole artifact is rendered before anything touches the disk, then
/// written next to `path` and renamed into place. A failed run leaves an
/// existing file at `path` unchanged.
pub fn write_chart(
    chart: &SeatChart,
    format: OutputFormat,
    options: &ExportOptions,
    path: &Path,
) -> Result<()> {
    tracing::debug!(path = %path.display(), format = ?format, "Writing seat chart");

    let contents = match format {
        OutputFormat::Xlsx => write_xlsx(chart, options)?,
        OutputFormat::Json => render_json(chart, options, chrono::Utc::now())?.into_bytes(),
        OutputFormat::Markdown => render_markdown(chart, options).into_bytes(),
    };

    write_atomic(path, &contents)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    let result = fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temp output file: {}", temp_path.display()))
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .with_context(|| format!("Failed to write output file {}", path.display()))
        });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// `chart.xlsx` becomes `chart.xlsx.tmp` in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
