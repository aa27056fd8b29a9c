//! Seat records from both input sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used by tabular seat identifiers ("3-7").
pub const IDENTIFIER_SEPARATOR: char = '-';

/// Separator used by layout coordinate keys ("3_7").
pub const COORDINATE_SEPARATOR: char = '_';

/// One row of the tabular assignment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// Seat identifier, expected in "row-col" form
    pub identifier: String,
    /// Partition (group) name, matched against layout group names
    pub partition: String,
    /// Occupant shown in the seat cell
    pub occupant: String,
}

impl SeatRecord {
    /// Creates a new `SeatRecord`.
    pub fn new(
        identifier: impl Into<String>,
        partition: impl Into<String>,
        occupant: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            partition: partition.into(),
            occupant: occupant.into(),
        }
    }
}

/// A seat from the layout definition.
///
/// `key` is the opaque object key from the layout document; the seat's
/// identity for matching purposes is its `(row, col)` position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSeat {
    /// Object key in the layout document
    pub key: String,
    /// 1-based grid row
    pub row: u32,
    /// 1-based grid column
    pub col: u32,
    /// Group this seat belongs to
    pub group_name: Option<String>,
    /// Declared display color, as written in the source
    pub color: Option<String>,
}

impl LayoutSeat {
    /// Creates a seat without group or color.
    pub fn new(key: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            key: key.into(),
            row,
            col,
            group_name: None,
            color: None,
        }
    }

    /// Sets the group name. Blank names are treated as absent.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = non_blank(group.into());
        self
    }

    /// Sets the declared color. Blank values are treated as absent.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = non_blank(color.into());
        self
    }

    /// Coordinate key for this seat's position.
    #[must_use]
    pub fn coordinate_key(&self) -> CoordinateKey {
        CoordinateKey::from_position(self.row, self.col)
    }
}

/// The `"{row}_{col}"` key that aligns tabular identifiers with layout seats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateKey(String);

impl CoordinateKey {
    /// Builds the key for a grid position.
    #[must_use]
    pub fn from_position(row: u32, col: u32) -> Self {
        Self(format!("{row}{COORDINATE_SEPARATOR}{col}"))
    }

    /// Builds a key from the two halves of a tabular identifier.
    #[must_use]
    pub fn from_parts(row: &str, col: &str) -> Self {
        Self(format!("{row}{COORDINATE_SEPARATOR}{col}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
