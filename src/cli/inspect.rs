//! Inspect command: merge inputs and report without writing a file.

use crate::cli::common::{CliError, CliResult, InputArgs};
use crate::config::Config;
use crate::models::SeatChart;
use clap::Args;

/// Show merge statistics, legends and warnings for a pair of inputs
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the full merged chart as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let chart = self.input.build_chart(&config.input)?;

        if self.json {
            let json = serde_json::to_string_pretty(&chart)
                .map_err(|e| CliError::io(format!("Failed to serialize seat chart: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_report(&chart));
        }

        Ok(())
    }
}

/// Human-readable inspection report.
fn format_report(chart: &SeatChart) -> String {
    use std::fmt::Write as _;

    let stats = &chart.stats;
    let mut out = String::new();

    out.push_str("Seat Chart\n==========\n\n");
    let _ = writeln!(out, "Grid: {} rows x {} columns", stats.max_row, stats.max_col);
    let _ = writeln!(out, "Seats: {}", stats.total_seats);
    let _ = writeln!(out, "Tabular rows: {}", stats.tabular_rows);
    let _ = writeln!(out, "Matched: {}", stats.matched_seats);
    let _ = writeln!(out, "Filled: {}", stats.filled_seats);
    out.push('\n');

    out.push_str("Groups:\n");
    if chart.legend.groups.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in &chart.legend.groups {
        let _ = writeln!(
            out,
            "  {} {} ({} seats)",
            entry.color, entry.group, entry.seat_count
        );
    }
    out.push('\n');

    out.push_str("Partitions:\n");
    if chart.legend.partitions.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in &chart.legend.partitions {
        let _ = writeln!(out, "  {}: {} rows", entry.partition, entry.row_count);
    }

    if !chart.diagnostics.is_empty() {
        let _ = writeln!(out, "\nWarnings ({}):", chart.diagnostics.len());
        for diagnostic in &chart.diagnostics {
            let _ = writeln!(out, "  [{}] {diagnostic}", diagnostic.kind.label());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LayoutSeat, SeatRecord};
    use crate::services::SeatChartService;

    #[test]
    fn test_format_report() {
        let seats = vec![
            LayoutSeat::new("s1", 1, 1).with_group("A").with_color("#ff0000"),
            LayoutSeat::new("s2", 2, 3).with_color("nope"),
        ];
        let records = vec![
            SeatRecord::new("1-1", "A", "SchoolX"),
            SeatRecord::new("1-2-3", "A", "Bad"),
        ];
        let report = format_report(&SeatChartService::build(seats, &records));

        assert!(report.contains("Grid: 2 rows x 3 columns"));
        assert!(report.contains("Filled: 1"));
        assert!(report.contains("FFFF0000 A (1 seats)"));
        assert!(report.contains("A: 2 rows"));
        assert!(report.contains("Warnings (2):"));
        assert!(report.contains("[malformed color]"));
        assert!(report.contains("[rejected identifier]"));
    }

    #[test]
    fn test_format_report_empty() {
        let report = format_report(&SeatChartService::build(Vec::new(), &[]));
        assert!(report.contains("Groups:\n  (none)"));
        assert!(!report.contains("Warnings"));
    }
}
