//! The complete merge result consumed by output sinks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::diagnostic::Diagnostics;
use super::grid::{GridExtent, MergedCell};
use super::legend::Legend;

/// Counters reported to the user after a run. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStats {
    /// Number of seats in the layout source
    pub total_seats: usize,
    /// Layout seats matched to a tabular row
    pub matched_seats: usize,
    /// Matched seats that show a non-empty occupant
    pub filled_seats: usize,
    /// Non-blank rows in the tabular source
    pub tabular_rows: usize,
    /// Grid height
    pub max_row: u32,
    /// Grid width
    pub max_col: u32,
    /// Distinct layout groups with a color
    pub group_count: usize,
    /// Distinct partitions in the tabular source
    pub partition_count: usize,
}

/// Merged grid, legend, statistics and warnings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatChart {
    /// Grid dimensions
    pub extent: GridExtent,
    /// One cell per layout seat, in layout source order
    pub cells: Vec<MergedCell>,
    /// Group and partition legend tables
    pub legend: Legend,
    /// Run counters
    pub stats: ChartStats,
    /// Non-fatal warnings raised during the run
    pub diagnostics: Diagnostics,
}

impl SeatChart {
    /// Indexes cells by `(row, col)` in one pass.
    ///
    /// Cells are inserted in layout order, so a later seat replaces an
    /// earlier one at the same position.
    #[must_use]
    pub fn cell_index(&self) -> HashMap<(u32, u32), &MergedCell> {
        self.cells
            .iter()
            .map(|cell| ((cell.row, cell.col), cell))
            .collect()
    }

    /// Finds the last cell written at a position.
    ///
    /// Later seats win when two layout entries share a position, matching how
    /// sinks render the grid.
    #[must_use]
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&MergedCell> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.row == row && cell.col == col)
    }
}
