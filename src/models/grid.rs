//! Merged grid cells handed to output sinks.

use serde::{Deserialize, Serialize};

use super::color::CanonicalColor;

/// Bounding dimensions of the output grid.
///
/// Coordinates are 1-based and need not be contiguous; positions below the
/// maxima that no seat occupies stay blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExtent {
    /// Largest row seen in the layout
    pub max_row: u32,
    /// Largest column seen in the layout
    pub max_col: u32,
}

impl GridExtent {
    /// Largest seat row a workbook can hold. The layout sheet puts the title
    /// and column numbers above the grid and the note three rows below it,
    /// inside the 1,048,576 row sheet limit.
    pub const MAX_ROW: u32 = 1_048_572;

    /// Largest seat column a workbook can hold next to the row label column,
    /// inside the 16,384 column (`XFD`) sheet limit.
    pub const MAX_COL: u32 = 16_383;

    /// Returns true when a 1-based seat position fits in the output grid.
    #[must_use]
    pub const fn contains(row: u32, col: u32) -> bool {
        row >= 1 && col >= 1 && row <= Self::MAX_ROW && col <= Self::MAX_COL
    }

    /// Grows the extent to include a position.
    pub fn include(&mut self, row: u32, col: u32) {
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    /// Returns true when no seat has been included.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max_row == 0 || self.max_col == 0
    }
}

/// Final record for one layout seat after merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedCell {
    /// Layout object key the cell came from
    pub seat_key: String,
    /// 1-based grid row
    pub row: u32,
    /// 1-based grid column
    pub col: u32,
    /// Layout group of the seat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Occupant name, `None` for empty seats
    pub value: Option<String>,
    /// Fill color, `None` means no fill instruction
    pub fill: Option<CanonicalColor>,
}

impl MergedCell {
    /// Returns true if the cell shows an occupant.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}
