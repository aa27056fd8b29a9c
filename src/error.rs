//! Error types for seat chart generation.
//!
//! Only conditions that abort a run are errors. Recoverable problems such as
//! malformed colors are reported as [`Diagnostic`](crate::models::Diagnostic)s
//! and never surface here.

use thiserror::Error;

use crate::models::GridExtent;

/// Minimum number of columns the tabular source must provide
/// (seat identifier, partition, occupant).
pub const REQUIRED_COLUMNS: usize = 3;

/// Result type used by the parsers and the merge pipeline.
pub type Result<T> = std::result::Result<T, SeatChartError>;

/// Fatal errors raised while reading or validating input documents.
#[derive(Error, Debug)]
pub enum SeatChartError {
    /// The tabular source is narrower than the three required columns.
    #[error(
        "Tabular source must have at least {required} columns (seat, partition, name), found {found}"
    )]
    StructuralInput {
        /// Widest row seen in the source
        found: usize,
        /// Required column count
        required: usize,
    },

    /// The layout source could not be decoded.
    #[error("Failed to decode layout source: {0}")]
    Decode(String),

    /// A layout seat uses a zero row or column.
    #[error("Layout seat '{key}' has invalid position ({row}, {col}); rows and columns start at 1")]
    InvalidCoordinate {
        /// Object key of the offending seat
        key: String,
        /// Declared row
        row: u32,
        /// Declared column
        col: u32,
    },

    /// A layout seat lies beyond the rows or columns a workbook can hold.
    #[error(
        "Layout seat '{key}' at ({row}, {col}) is outside the supported grid (rows 1-{max_row}, columns 1-{max_col})"
    )]
    CoordinateOutOfRange {
        /// Object key of the offending seat
        key: String,
        /// Declared row
        row: u32,
        /// Declared column
        col: u32,
        /// Largest accepted row
        max_row: u32,
        /// Largest accepted column
        max_col: u32,
    },

    /// The spreadsheet reader rejected the workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The tabular file extension is not one we can read.
    #[error("Unsupported tabular file type: {0}")]
    UnsupportedFormat(String),

    /// I/O failure while reading inputs or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeatChartError {
    /// Reports a seat outside [`GridExtent::contains`].
    pub fn out_of_range(key: impl Into<String>, row: u32, col: u32) -> Self {
        Self::CoordinateOutOfRange {
            key: key.into(),
            row,
            col,
            max_row: GridExtent::MAX_ROW,
            max_col: GridExtent::MAX_COL,
        }
    }
}

impl From<serde_json::Error> for SeatChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<csv::Error> for SeatChartError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<calamine::Error> for SeatChartError {
    fn from(err: calamine::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}
