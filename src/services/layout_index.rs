//! Coordinate index over layout seats.
//!
//! A single scan over the layout computes the grid extent and the group
//! color table used by the merge and legend passes.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    CanonicalColor, CoordinateKey, Diagnostic, DiagnosticKind, Diagnostics, GridExtent,
    LayoutSeat,
};

/// Group name to canonical color, iterated in ascending name order.
///
/// Built once from the layout. The first seat (in document order) that
/// declares both a group and a color decides that group's color; later
/// colors for the same group are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupColorTable {
    colors: BTreeMap<String, CanonicalColor>,
}

impl GroupColorTable {
    /// Looks up the color for a group or partition name.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<CanonicalColor> {
        self.colors.get(group).copied()
    }

    /// Number of groups with a color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true when no group has a color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(group, color)` in ascending group order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalColor)> {
        self.colors.iter().map(|(group, color)| (group.as_str(), *color))
    }

    /// Records a color unless the group already has one. Returns whether the
    /// color was stored.
    fn insert_first(&mut self, group: &str, color: CanonicalColor) -> bool {
        match self.colors.entry(group.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(color);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

/// Layout seats with their grid extent and group colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutIndex {
    seats: Vec<LayoutSeat>,
    group_colors: GroupColorTable,
    extent: GridExtent,
}

impl LayoutIndex {
    /// Indexes layout seats.
    ///
    /// Group colors are normalized as they are recorded; a malformed color on
    /// the seat that first names a group becomes white with a warning.
    /// Seats that share a position are kept and reported as
    /// [`DiagnosticKind::DuplicateCoordinate`].
    pub fn build(seats: Vec<LayoutSeat>, diagnostics: &mut Diagnostics) -> Self {
        let mut extent = GridExtent::default();
        let mut group_colors = GroupColorTable::default();
        let mut positions: HashMap<CoordinateKey, &str> = HashMap::new();

        for seat in &seats {
            extent.include(seat.row, seat.col);

            if let Some(previous) = positions.insert(seat.coordinate_key(), &seat.key) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::DuplicateCoordinate,
                        format!(
                            "Seats '{previous}' and '{}' both occupy row {}, column {}",
                            seat.key, seat.row, seat.col
                        ),
                    )
                    .with_context(format!("layout seat '{}'", seat.key)),
                );
            }

            if let (Some(group), Some(raw)) = (&seat.group_name, &seat.color) {
                if group_colors.get(group).is_none() {
                    let (color, warning) = CanonicalColor::normalize(raw);
                    diagnostics.extend(
                        warning.map(|w| w.with_context(format!("layout seat '{}'", seat.key))),
                    );
                    group_colors.insert_first(group, color);
                }
            }
        }

        tracing::debug!(
            seats = seats.len(),
            groups = group_colors.len(),
            max_row = extent.max_row,
            max_col = extent.max_col,
            "Indexed layout"
        );

        Self {
            seats,
            group_colors,
            extent,
        }
    }

    /// Seats in layout document order.
    #[must_use]
    pub fn seats(&self) -> &[LayoutSeat] {
        &self.seats
    }

    /// Group color table.
    #[must_use]
    pub const fn group_colors(&self) -> &GroupColorTable {
        &self.group_colors
    }

    /// Grid bounding dimensions.
    #[must_use]
    pub const fn extent(&self) -> GridExtent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(key: &str, row: u32, col: u32) -> LayoutSeat {
        LayoutSeat::new(key, row, col)
    }

    #[test]
    fn test_extent_covers_sparse_grid() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(
            vec![seat("a", 2, 9), seat("b", 7, 1), seat("c", 3, 3)],
            &mut diags,
        );

        assert_eq!(index.extent(), GridExtent { max_row: 7, max_col: 9 });
        assert_eq!(index.seats().len(), 3);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_first_group_color_wins() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(
            vec![
                seat("a", 1, 1).with_group("VIP").with_color("#ff0000"),
                seat("b", 1, 2).with_group("VIP").with_color("#0000ff"),
                seat("c", 1, 3).with_group("Press").with_color("0f0"),
            ],
            &mut diags,
        );

        let table = index.group_colors();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("VIP").unwrap().to_string(), "FFFF0000");
        assert_eq!(table.get("Press").unwrap().to_string(), "FF00FF00");
    }

    #[test]
    fn test_group_without_color_waits_for_colored_seat() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(
            vec![
                seat("a", 1, 1).with_group("A"),
                seat("b", 1, 2).with_color("#123456"),
                seat("c", 1, 3).with_group("A").with_color("#abcdef"),
            ],
            &mut diags,
        );

        assert_eq!(index.group_colors().len(), 1);
        assert_eq!(
            index.group_colors().get("A"),
            Some(CanonicalColor::opaque(0xAB, 0xCD, 0xEF))
        );
    }

    #[test]
    fn test_group_table_iterates_sorted() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(
            vec![
                seat("a", 1, 1).with_group("Zeta").with_color("fff"),
                seat("b", 1, 2).with_group("Alpha").with_color("000"),
            ],
            &mut diags,
        );

        let names: Vec<&str> = index.group_colors().iter().map(|(g, _)| g).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_malformed_group_color_warns_once() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(
            vec![
                seat("a", 1, 1).with_group("A").with_color("blue"),
                seat("b", 1, 2).with_group("A").with_color("green"),
            ],
            &mut diags,
        );

        assert_eq!(index.group_colors().get("A"), Some(CanonicalColor::WHITE));
        assert_eq!(diags.count_of(DiagnosticKind::MalformedColor), 1);
        assert_eq!(
            diags.iter().next().unwrap().context.as_deref(),
            Some("layout seat 'a'")
        );
    }

    #[test]
    fn test_duplicate_coordinate_reported() {
        let mut diags = Diagnostics::new();
        let index = LayoutIndex::build(vec![seat("a", 4, 4), seat("b", 4, 4)], &mut diags);

        assert_eq!(index.seats().len(), 2);
        assert_eq!(diags.count_of(DiagnosticKind::DuplicateCoordinate), 1);
    }
}
