//! Error, exit code and input argument types shared by CLI commands.

use clap::Args;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::InputConfig;
use crate::error::SeatChartError;
use crate::models::SeatChart;
use crate::parser::TabularOptions;
use crate::services::inputs;
use crate::services::SeatChartService;

/// Input files and reading options shared by `generate` and `inspect`.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Seat assignments (CSV, TSV, XLSX, XLS or ODS)
    #[arg(short, long, value_name = "FILE")]
    pub seats: PathBuf,

    /// Layout definition (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Treat the first row of the seat file as a header
    #[arg(long)]
    pub has_header: bool,

    /// Worksheet to read from spreadsheet inputs
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,
}

impl InputArgs {
    /// Reading options: flags override the `[input]` config section.
    #[must_use]
    pub fn tabular_options(&self, config: &InputConfig) -> TabularOptions {
        TabularOptions {
            has_header: self.has_header || config.has_header,
            sheet: self.sheet.clone().or_else(|| config.sheet.clone()),
        }
    }

    /// Loads both inputs and builds the merged chart.
    ///
    /// Every diagnostic is logged as a warning.
    pub fn build_chart(&self, config: &InputConfig) -> CliResult<SeatChart> {
        require_file("Layout", &self.layout)?;
        require_file("Seat", &self.seats)?;

        let seats = inputs::load_layout(&self.layout)
            .map_err(|e| CliError::from_load("Failed to load layout", &e))?;
        let records = inputs::load_seat_records(&self.seats, &self.tabular_options(config))
            .map_err(|e| CliError::from_load("Failed to load seat records", &e))?;

        tracing::info!(
            seats = seats.len(),
            records = records.len(),
            "Loaded inputs"
        );

        let chart = SeatChartService::build(seats, &records);
        for diagnostic in &chart.diagnostics {
            tracing::warn!(kind = diagnostic.kind.label(), "{diagnostic}");
        }

        Ok(chart)
    }
}

fn require_file(label: &str, path: &Path) -> CliResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::io(format!(
            "{label} file not found: {}",
            path.display()
        )))
    }
}

/// Process exit codes.
///
/// - `0`: success
/// - `1`: invalid input (malformed files, bad arguments, invalid config)
/// - `2`: I/O failure (missing file, unwritable output)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input or argument validation failed
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Classifies an input loading failure.
    ///
    /// Filesystem errors map to [`ExitCode::IoError`]; malformed content maps
    /// to [`ExitCode::ValidationError`].
    pub fn from_load(prefix: &str, err: &anyhow::Error) -> Self {
        let message = format!("{prefix}: {err:#}");
        let is_io = err.chain().any(|cause| {
            cause.is::<std::io::Error>()
                || matches!(
                    cause.downcast_ref::<SeatChartError>(),
                    Some(SeatChartError::Io(_))
                )
        });

        if is_io {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
