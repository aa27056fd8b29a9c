//! Input file loading.
//!
//! Thin wrappers over [`crate::parser`] that read from disk and attach the
//! file path to any error.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;

use crate::models::{LayoutSeat, SeatRecord};
use crate::parser::{self, TabularFormat, TabularOptions};

/// Loads a layout definition from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use seatchart::services::inputs::load_layout;
///
/// let seats = load_layout(Path::new("layout.json"))?;
/// println!("{} seats", seats.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_layout(path: &Path) -> Result<Vec<LayoutSeat>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read layout file {}", path.display()))?;

    parser::parse_layout_bytes(&bytes)
        .with_context(|| format!("Failed to load layout from {}", path.display()))
}

/// Loads seat records from a CSV/TSV or spreadsheet file, chosen by extension.
pub fn load_seat_records(path: &Path, options: &TabularOptions) -> Result<Vec<SeatRecord>> {
    let format = TabularFormat::from_path(path)?;

    let records = match format {
        TabularFormat::Csv | TabularFormat::Tsv => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open seat file {}", path.display()))?;
            let delimiter = if format == TabularFormat::Tsv { b'\t' } else { b',' };
            parser::parse_csv(file, delimiter, options)
        }
        TabularFormat::Spreadsheet => parser::read_spreadsheet(path, options),
    };

    records.with_context(|| format!("Failed to load seat records from {}", path.display()))
}
