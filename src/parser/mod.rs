//! Parsing for the two input documents.
//!
//! The layout definition is JSON ([`layout_json`]); seat assignments are a
//! table read from CSV/TSV or a spreadsheet workbook ([`tabular`]).

pub mod layout_json;
pub mod tabular;

// Re-export commonly used functions
pub use layout_json::{parse_layout_bytes, parse_layout_json};
pub use tabular::{parse_csv, read_spreadsheet, records_from_rows, TabularFormat, TabularOptions};
