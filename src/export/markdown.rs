//! Markdown rendering of a seat chart.
//!
//! Produces a grid table of the seating followed by the group and
//! partition legends, suitable for a README or a pull request comment.

use crate::models::SeatChart;
use std::fmt::Write as _;

use super::ExportOptions;

/// Placeholder for a seat that exists but has no occupant.
const EMPTY_SEAT: &str = "·";

/// Renders the chart as a markdown document.
///
/// # Examples
///
/// ```
/// use seatchart::export::{markdown::render_markdown, ExportOptions};
/// use seatchart::models::{LayoutSeat, SeatRecord};
/// use seatchart::services::SeatChartService;
///
/// let seats = vec![LayoutSeat::new("s1", 1, 1).with_group("A").with_color("f00")];
/// let chart = SeatChartService::build(seats, &[SeatRecord::new("1-1", "A", "Ann")]);
///
/// let markdown = render_markdown(&chart, &ExportOptions::default());
/// assert!(markdown.contains("| Row 1 | Ann `FFFF0000` |"));
/// ```
pub fn render_markdown(chart: &SeatChart, options: &ExportOptions) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}\n", options.title);

    output.push_str(&render_grid(chart));
    output.push_str(&render_group_legend(chart));
    output.push_str(&render_partition_legend(chart));

    // Summary
    let stats = &chart.stats;
    output.push_str("## Summary\n\n");
    let _ = writeln!(output, "- **Seats:** {}", stats.total_seats);
    let _ = writeln!(output, "- **Matched:** {}", stats.matched_seats);
    let _ = writeln!(output, "- **Filled:** {}", stats.filled_seats);
    let _ = writeln!(output, "- **Tabular rows:** {}", stats.tabular_rows);
    let _ = writeln!(output, "- **Warnings:** {}", chart.diagnostics.len());

    output
}

fn render_grid(chart: &SeatChart) -> String {
    let mut output = String::from("## Seating\n\n");

    if chart.extent.is_empty() {
        output.push_str("_No seats in layout._\n\n");
        return output;
    }

    output.push_str("| |");
    for col in 1..=chart.extent.max_col {
        let _ = write!(output, " {col} |");
    }
    output.push_str("\n|---|");
    for _ in 1..=chart.extent.max_col {
        output.push_str("---|");
    }
    output.push('\n');

    let cells = chart.cell_index();
    for row in 1..=chart.extent.max_row {
        let _ = write!(output, "| Row {row} |");
        for col in 1..=chart.extent.max_col {
            match cells.get(&(row, col)) {
                Some(cell) => {
                    let value = cell.value.as_deref().map_or(EMPTY_SEAT.to_string(), escape_cell);
                    match cell.fill {
                        Some(fill) => {
                            let _ = write!(output, " {value} `{fill}` |");
                        }
                        None => {
                            let _ = write!(output, " {value} |");
                        }
                    }
                }
                None => output.push_str("  |"),
            }
        }
        output.push('\n');
    }

    output.push('\n');
    output
}

fn render_group_legend(chart: &SeatChart) -> String {
    let mut output = String::from("## Groups\n\n");

    if chart.legend.groups.is_empty() {
        output.push_str("_No colored groups._\n\n");
        return output;
    }

    output.push_str("| Color | Group | Seats |\n|---|---|---|\n");
    for entry in &chart.legend.groups {
        let _ = writeln!(
            output,
            "| `{}` | {} | {} |",
            entry.color,
            escape_cell(&entry.group),
            entry.seat_count
        );
    }
    output.push('\n');
    output
}

fn render_partition_legend(chart: &SeatChart) -> String {
    let mut output = String::from("## Partitions\n\n");

    if chart.legend.partitions.is_empty() {
        output.push_str("_No tabular rows._\n\n");
        return output;
    }

    output.push_str("| Partition | Rows |\n|---|---|\n");
    for entry in &chart.legend.partitions {
        let _ = writeln!(
            output,
            "| {} | {} |",
            escape_cell(&entry.partition),
            entry.row_count
        );
    }
    output.push('\n');
    output
}

/// Escapes pipes and flattens newlines so text stays inside one table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
