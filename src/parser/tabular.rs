//! Tabular seat assignment readers (CSV/TSV and spreadsheets).
//!
//! The table carries no header by default: every non-blank row is a seat
//! record with columns `identifier, partition, occupant`. Extra columns are
//! ignored.

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SeatChartError, REQUIRED_COLUMNS};
use crate::models::SeatRecord;

/// Options controlling how a tabular source is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularOptions {
    /// Skip the first row
    pub has_header: bool,
    /// Worksheet to read from spreadsheets (first sheet when `None`)
    pub sheet: Option<String>,
}

/// Physical format of a tabular file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// Any workbook calamine can open (xlsx, xlsm, xlsb, xls, ods)
    Spreadsheet,
}

impl TabularFormat {
    /// Detects the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SeatChartError::UnsupportedFormat`] for unknown or missing
    /// extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Spreadsheet),
            _ => Err(SeatChartError::UnsupportedFormat(format!(
                "'{}' (expected .csv, .tsv, .xlsx, .xls or .ods)",
                path.display()
            ))),
        }
    }
}

/// Builds seat records from raw rows, enforcing the three-column minimum.
///
/// Fully blank rows are skipped and short rows are padded with blanks.
/// Cell values are trimmed.
///
/// # Errors
///
/// Returns [`SeatChartError::StructuralInput`] when the widest row has fewer
/// than three columns (this includes an empty table).
pub fn records_from_rows(rows: Vec<Vec<String>>, has_header: bool) -> Result<Vec<SeatRecord>> {
    let data_rows: Vec<Vec<String>> = rows
        .into_iter()
        .skip(usize::from(has_header))
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    let width = data_rows.iter().map(Vec::len).max().unwrap_or(0);
    if width < REQUIRED_COLUMNS {
        return Err(SeatChartError::StructuralInput {
            found: width,
            required: REQUIRED_COLUMNS,
        });
    }

    let records = data_rows
        .into_iter()
        .map(|row| {
            let column = |index: usize| row.get(index).map_or("", |c| c.trim()).to_string();
            SeatRecord::new(column(0), column(1), column(2))
        })
        .collect();

    Ok(records)
}

/// Reads delimited text into seat records.
///
/// # Errors
///
/// Returns [`SeatChartError::Csv`] for reader failures (including invalid
/// UTF-8) and [`SeatChartError::StructuralInput`] for narrow tables.
pub fn parse_csv<R: Read>(
    reader: R,
    delimiter: u8,
    options: &TabularOptions,
) -> Result<Vec<SeatRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    records_from_rows(rows, options.has_header)
}

/// Reads a worksheet from a spreadsheet file into seat records.
///
/// # Errors
///
/// Returns [`SeatChartError::Spreadsheet`] if the workbook cannot be opened or
/// the requested sheet does not exist, and
/// [`SeatChartError::StructuralInput`] for narrow tables.
pub fn read_spreadsheet(path: &Path, options: &TabularOptions) -> Result<Vec<SeatRecord>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet = match &options.sheet {
        Some(name) if sheet_names.iter().any(|s| s == name) => name.clone(),
        Some(name) => {
            return Err(SeatChartError::Spreadsheet(format!(
                "Worksheet '{name}' not found (available: {})",
                sheet_names.join(", ")
            )))
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| SeatChartError::Spreadsheet("Workbook has no worksheets".into()))?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    records_from_rows(rows, options.has_header)
}

/// Renders a spreadsheet cell as text. Integral floats lose their ".0" so a
/// partition typed as `3` reads back as "3".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract().abs() < f64::EPSILON && f.abs() < 1e15 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR:{e:?}"),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_records_from_rows_basic() {
        let records = records_from_rows(
            rows(&[&["1-1", "A", "SchoolX"], &["1-2", "C", "SchoolY", "extra"]]),
            false,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SeatRecord::new("1-1", "A", "SchoolX"));
        assert_eq!(records[1], SeatRecord::new("1-2", "C", "SchoolY"));
    }

    #[test]
    fn test_first_row_is_data_without_header_flag() {
        let data = rows(&[&["Seat", "Zone", "Name"], &["1-1", "A", "X"]]);

        let records = records_from_rows(data.clone(), false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, "Seat");

        let records = records_from_rows(data, true).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "1-1");
    }

    #[test]
    fn test_narrow_table_is_structural_error() {
        let err = records_from_rows(rows(&[&["1-1", "A"], &["1-2", "B"]]), false).unwrap_err();
        match err {
            SeatChartError::StructuralInput { found, required } => {
                assert_eq!(found, 2);
                assert_eq!(required, 3);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = records_from_rows(Vec::new(), false).unwrap_err();
        assert!(matches!(err, SeatChartError::StructuralInput { found: 0, .. }));
    }

    #[test]
    fn test_short_rows_padded_and_blank_rows_skipped() {
        let records = records_from_rows(
            rows(&[&["1-1", "A", "X"], &["", " ", ""], &["2-2", "B"]]),
            false,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], SeatRecord::new("2-2", "B", ""));
    }

    #[test]
    fn test_parse_csv_trims_and_handles_ragged_rows() {
        let input = "1-1, A ,School X\n1-2,B\n\n2-1,C,School Z,ignored\n";
        let records = parse_csv(input.as_bytes(), b',', &TabularOptions::default()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], SeatRecord::new("1-1", "A", "School X"));
        assert_eq!(records[1], SeatRecord::new("1-2", "B", ""));
        assert_eq!(records[2].occupant, "School Z");
    }

    #[test]
    fn test_parse_tsv() {
        let input = "3-4\tVIP\tGuest\n";
        let records = parse_csv(input.as_bytes(), b'\t', &TabularOptions::default()).unwrap();
        assert_eq!(records, vec![SeatRecord::new("3-4", "VIP", "Guest")]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            TabularFormat::from_path(Path::new("seats.CSV")).unwrap(),
            TabularFormat::Csv
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("seats.tsv")).unwrap(),
            TabularFormat::Tsv
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("seats.xlsx")).unwrap(),
            TabularFormat::Spreadsheet
        );
        assert!(matches!(
            TabularFormat::from_path(Path::new("seats.pdf")),
            Err(SeatChartError::UnsupportedFormat(_))
        ));
        assert!(TabularFormat::from_path(Path::new("seats")).is_err());
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("1-5".into())), "1-5");
    }
}
