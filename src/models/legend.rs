//! Legend tables derived after the merge.

use serde::{Deserialize, Serialize};

use super::color::CanonicalColor;

/// Layout group with its canonical color and seat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLegendEntry {
    /// Group name from the layout
    pub group: String,
    /// First color declared for the group
    pub color: CanonicalColor,
    /// Number of layout seats in the group
    pub seat_count: usize,
}

/// Partition from the tabular source with its row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionLegendEntry {
    /// Partition name
    pub partition: String,
    /// Number of tabular rows carrying the partition
    pub row_count: usize,
}

/// Both legend tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    /// Groups in ascending name order
    pub groups: Vec<GroupLegendEntry>,
    /// Partitions by descending row count, ties in first-seen order
    pub partitions: Vec<PartitionLegendEntry>,
}
