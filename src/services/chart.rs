//! Seat chart assembly.
//!
//! Runs the full pipeline over already-parsed inputs:
//! layout index + identifier bridge → merge → legend.

use crate::models::{ChartStats, Diagnostics, LayoutSeat, SeatChart, SeatRecord};

use super::identifier_bridge::IdentifierBridge;
use super::layout_index::LayoutIndex;
use super::{legend, merge};

/// Service that turns layout seats and seat records into a [`SeatChart`].
pub struct SeatChartService;

impl SeatChartService {
    /// Builds the merged chart.
    ///
    /// This is a single synchronous pass. Nothing here fails: recoverable
    /// input problems end up in [`SeatChart::diagnostics`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seatchart::models::{LayoutSeat, SeatRecord};
    /// use seatchart::services::SeatChartService;
    ///
    /// let seats = vec![LayoutSeat::new("s1", 1, 1).with_group("A").with_color("#ff0000")];
    /// let records = vec![SeatRecord::new("1-1", "A", "SchoolX")];
    ///
    /// let chart = SeatChartService::build(seats, &records);
    /// assert_eq!(chart.stats.filled_seats, 1);
    /// assert_eq!(chart.cells[0].fill.unwrap().to_string(), "FFFF0000");
    /// ```
    pub fn build(seats: Vec<LayoutSeat>, records: &[SeatRecord]) -> SeatChart {
        let mut diagnostics = Diagnostics::new();

        let index = LayoutIndex::build(seats, &mut diagnostics);
        let bridge = IdentifierBridge::build(records, &mut diagnostics);
        let outcome = merge::merge(&index, records, &bridge, &mut diagnostics);
        let legend = legend::aggregate(index.seats(), records, index.group_colors());

        let extent = index.extent();
        let stats = ChartStats {
            total_seats: index.seats().len(),
            matched_seats: outcome.matched_seats,
            filled_seats: outcome.filled_seats,
            tabular_rows: records.len(),
            max_row: extent.max_row,
            max_col: extent.max_col,
            group_count: index.group_colors().len(),
            partition_count: legend.partitions.len(),
        };

        tracing::debug!(
            total = stats.total_seats,
            filled = stats.filled_seats,
            warnings = diagnostics.len(),
            "Built seat chart"
        );

        SeatChart {
            extent,
            cells: outcome.cells,
            legend,
            stats,
            diagnostics,
        }
    }
}
