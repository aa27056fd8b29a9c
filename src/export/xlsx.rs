//! XLSX workbook writer.
//!
//! Produces two sheets: the seat grid and the color legend.
//!
//! # Layout Sheet
//!
//! ```text
//!      A        B      C      ...
//! 1   [ title, merged across all columns            ]
//! 2            1      2      ...      column numbers
//! 3   Row 1   seat   seat
//! 4   Row 2   seat   seat
//! ...
//! max_row+4   note pointing at the legend sheet
//! ```
//!
//! Seat `(row, col)` lands at sheet cell `(row + 2, col + 1)`, so every
//! position must satisfy [`GridExtent::contains`].

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};

use super::ExportOptions;
use crate::error::SeatChartError;
use crate::models::{CanonicalColor, GridExtent, MergedCell, SeatChart};

/// Header labels of the group table on the legend sheet.
const GROUP_HEADERS: [&str; 3] = ["Color", "Group", "Seats"];

/// Header labels of the partition table on the legend sheet.
const PARTITION_HEADERS: [&str; 3] = ["Partition", "Rows", ""];

/// Legend sheet column widths (swatch, name, count).
const LEGEND_WIDTHS: [f64; 3] = [15.0, 20.0, 15.0];

/// Renders the chart as an XLSX workbook in memory.
///
/// # Errors
///
/// Returns [`SeatChartError::CoordinateOutOfRange`] if a cell lies outside
/// [`GridExtent::contains`], and any error the workbook writer reports for
/// sheet names or cell content.
pub fn write_xlsx(chart: &SeatChart, options: &ExportOptions) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(build_layout_sheet(chart, options)?);
    workbook.push_worksheet(build_legend_sheet(chart, options)?);

    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

/// Cell formats shared by both sheets.
struct SheetFormats {
    title: Format,
    label: Format,
    note: Format,
    header: Format,
    body: Format,
    bordered: Format,
}

impl SheetFormats {
    fn new() -> Self {
        let centered = Format::new().set_align(FormatAlign::Center);
        Self {
            title: centered.clone().set_bold().set_font_size(14),
            label: centered.clone().set_bold(),
            note: Format::new().set_italic(),
            header: centered.clone().set_bold().set_border(FormatBorder::Thin),
            body: centered.set_border(FormatBorder::Thin),
            bordered: Format::new().set_border(FormatBorder::Thin),
        }
    }

    /// Format of a seat cell, with a solid fill when the seat has one.
    fn seat(fill: Option<CanonicalColor>) -> Format {
        let format = Format::new()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();
        match fill {
            Some(color) => solid_fill(format, color),
            None => format,
        }
    }
}

fn solid_fill(format: Format, color: CanonicalColor) -> Format {
    format
        .set_pattern(FormatPattern::Solid)
        .set_background_color(fill_color(color))
}

/// Spreadsheet fills are opaque, so only the RGB channels are written.
fn fill_color(color: CanonicalColor) -> Color {
    Color::RGB(u32::from_be_bytes([0, color.r, color.g, color.b]))
}

/// Zero-based sheet position of a seat, checked against the grid limits.
fn seat_position(cell: &MergedCell) -> Result<(u32, u16), SeatChartError> {
    let out_of_range = || SeatChartError::out_of_range(&cell.seat_key, cell.row, cell.col);

    if !GridExtent::contains(cell.row, cell.col) {
        return Err(out_of_range());
    }
    let col = u16::try_from(cell.col).map_err(|_| out_of_range())?;
    Ok((cell.row + 1, col))
}

/// Writes `text` across columns `0..=last_col` of a row, merging only when
/// the range spans more than one cell.
fn write_merged(
    sheet: &mut Worksheet,
    row: u32,
    last_col: u16,
    text: &str,
    format: &Format,
) -> Result<()> {
    if last_col > 0 {
        sheet
            .merge_range(row, 0, row, last_col, text, format)
            .with_context(|| format!("Failed to merge row {}", row + 1))?;
    } else {
        sheet.write_string_with_format(row, 0, text, format)?;
    }
    Ok(())
}

fn build_layout_sheet(chart: &SeatChart, options: &ExportOptions) -> Result<Worksheet> {
    let positions = chart
        .cells
        .iter()
        .map(|cell| seat_position(cell).map(|position| (position, cell)))
        .collect::<Result<Vec<_>, _>>()?;

    let extent = chart.extent;
    if extent.max_row > GridExtent::MAX_ROW || extent.max_col > GridExtent::MAX_COL {
        return Err(
            SeatChartError::out_of_range("grid extent", extent.max_row, extent.max_col).into(),
        );
    }
    let max_row = extent.max_row;
    let max_col = u16::try_from(extent.max_col)?;

    let formats = SheetFormats::new();
    let mut sheet = Worksheet::new();
    sheet
        .set_name(&options.layout_sheet)
        .with_context(|| format!("Invalid layout sheet name '{}'", options.layout_sheet))?;

    for col in 0..=max_col {
        sheet.set_column_width(col, options.column_width)?;
    }

    write_merged(&mut sheet, 0, max_col, &options.title, &formats.title)?;

    for row in 1..=max_row {
        sheet.write_string_with_format(row + 1, 0, format!("Row {row}"), &formats.label)?;
    }
    for col in 1..=max_col {
        sheet.write_number_with_format(1, col, f64::from(col), &formats.label)?;
    }

    // Later seats overwrite earlier ones at a shared position
    for ((row, col), cell) in positions {
        let format = SheetFormats::seat(cell.fill);
        match cell.value.as_deref() {
            Some(value) => sheet.write_string_with_format(row, col, value, &format)?,
            None => sheet.write_blank(row, col, &format)?,
        };
    }

    let note = format!(
        "Note: see the \"{}\" sheet for the colors of each group",
        options.legend_sheet
    );
    write_merged(&mut sheet, max_row + 3, max_col, &note, &formats.note)?;

    Ok(sheet)
}

fn build_legend_sheet(chart: &SeatChart, options: &ExportOptions) -> Result<Worksheet> {
    let formats = SheetFormats::new();
    let mut sheet = Worksheet::new();
    sheet
        .set_name(&options.legend_sheet)
        .with_context(|| format!("Invalid legend sheet name '{}'", options.legend_sheet))?;

    for (col, width) in (0..).zip(LEGEND_WIDTHS) {
        sheet.set_column_width(col, width)?;
    }

    write_merged(&mut sheet, 0, 2, "Color Legend", &formats.title)?;
    for (col, text) in (0..).zip(GROUP_HEADERS) {
        sheet.write_string_with_format(2, col, text, &formats.header)?;
    }

    let mut row = 3;
    for entry in &chart.legend.groups {
        let swatch = solid_fill(formats.bordered.clone(), entry.color);
        sheet.write_blank(row, 0, &swatch)?;
        sheet.write_string_with_format(row, 1, &entry.group, &formats.body)?;
        sheet.write_number_with_format(row, 2, count(entry.seat_count), &formats.body)?;
        row += 1;
    }

    row += 2;
    write_merged(&mut sheet, row, 2, "Tabular partition statistics", &formats.label)?;

    row += 1;
    for (col, text) in (0..).zip(PARTITION_HEADERS) {
        sheet.write_string_with_format(row, col, text, &formats.header)?;
    }

    row += 1;
    for entry in &chart.legend.partitions {
        sheet.write_string_with_format(row, 0, &entry.partition, &formats.body)?;
        sheet.write_number_with_format(row, 1, count(entry.row_count), &formats.body)?;
        sheet.write_blank(row, 2, &formats.bordered)?;
        row += 1;
    }

    Ok(sheet)
}

// Legend counts stay far below 2^52
#[allow(clippy::cast_precision_loss)]
fn count(value: usize) -> f64 {
    value as f64
}
