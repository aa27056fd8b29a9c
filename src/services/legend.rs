//! Legend aggregation.

use indexmap::IndexMap;

use crate::models::{GroupLegendEntry, LayoutSeat, Legend, PartitionLegendEntry, SeatRecord};

use super::layout_index::GroupColorTable;

/// Computes the group and partition legend tables.
///
/// Groups come from the color table in ascending name order, each with the
/// number of layout seats carrying that group name. Partitions are counted
/// over all tabular rows (matched or not), sorted by descending count with
/// ties kept in first-seen order. Blank partitions are not counted.
pub fn aggregate(
    seats: &[LayoutSeat],
    records: &[SeatRecord],
    group_colors: &GroupColorTable,
) -> Legend {
    let groups = group_colors
        .iter()
        .map(|(group, color)| GroupLegendEntry {
            group: group.to_string(),
            color,
            seat_count: seats
                .iter()
                .filter(|seat| seat.group_name.as_deref() == Some(group))
                .count(),
        })
        .collect();

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        let partition = record.partition.trim();
        if !partition.is_empty() {
            *counts.entry(partition).or_insert(0) += 1;
        }
    }

    let mut partitions: Vec<PartitionLegendEntry> = counts
        .into_iter()
        .map(|(partition, row_count)| PartitionLegendEntry {
            partition: partition.to_string(),
            row_count,
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts
    partitions.sort_by(|a, b| b.row_count.cmp(&a.row_count));

    Legend { groups, partitions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diagnostics;
    use crate::services::layout_index::LayoutIndex;

    #[test]
    fn test_group_counts_include_unmatched_seats() {
        let seats = vec![
            LayoutSeat::new("a", 1, 1).with_group("B").with_color("00f"),
            LayoutSeat::new("b", 1, 2).with_group("A").with_color("f00"),
            LayoutSeat::new("c", 1, 3).with_group("B"),
            LayoutSeat::new("d", 1, 4).with_group("Uncolored"),
        ];
        let index = LayoutIndex::build(seats, &mut Diagnostics::new());
        let legend = aggregate(index.seats(), &[], index.group_colors());

        assert_eq!(legend.groups.len(), 2);
        assert_eq!(legend.groups[0].group, "A");
        assert_eq!(legend.groups[0].seat_count, 1);
        assert_eq!(legend.groups[1].group, "B");
        assert_eq!(legend.groups[1].seat_count, 2);
        assert_eq!(legend.groups[1].color.to_string(), "FF0000FF");
    }

    #[test]
    fn test_partitions_by_count_then_first_seen() {
        let records = vec![
            SeatRecord::new("1-1", "North", "a"),
            SeatRecord::new("1-2", "South", "b"),
            SeatRecord::new("x", "East", "c"),
            SeatRecord::new("1-4", "South", "d"),
            SeatRecord::new("1-5", "", "e"),
            SeatRecord::new("1-6", "East", "f"),
            SeatRecord::new("1-7", "West", "g"),
        ];
        let legend = aggregate(&[], &records, &GroupColorTable::default());

        let order: Vec<(&str, usize)> = legend
            .partitions
            .iter()
            .map(|p| (p.partition.as_str(), p.row_count))
            .collect();
        assert_eq!(
            order,
            vec![("South", 2), ("East", 2), ("North", 1), ("West", 1)]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let legend = aggregate(&[], &[], &GroupColorTable::default());
        assert_eq!(legend, Legend::default());
    }
}
