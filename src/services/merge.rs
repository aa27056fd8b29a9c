//! Merge of layout seats with tabular assignments.
//!
//! # Fill Priority
//!
//! For a seat matched to a tabular row:
//!
//! 1. **Partition color** (highest) - group color named by the row's partition
//! 2. **Seat color** - the color declared on the layout seat itself
//! 3. **White** (lowest) - `FFFFFFFF`
//!
//! Unmatched seats use their declared color, or no fill at all.

use crate::models::{CanonicalColor, Diagnostics, LayoutSeat, MergedCell, SeatRecord};

use super::identifier_bridge::IdentifierBridge;
use super::layout_index::{GroupColorTable, LayoutIndex};

/// Cells produced by a merge pass plus match counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// One cell per layout seat, in layout order
    pub cells: Vec<MergedCell>,
    /// Seats matched to a tabular row
    pub matched_seats: usize,
    /// Matched seats with a non-empty occupant
    pub filled_seats: usize,
}

/// Resolves the occupant and fill color of every layout seat.
///
/// Never fails. Malformed seat colors fall back to white and are reported
/// through `diagnostics`.
pub fn merge(
    index: &LayoutIndex,
    records: &[SeatRecord],
    bridge: &IdentifierBridge,
    diagnostics: &mut Diagnostics,
) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        cells: Vec::with_capacity(index.seats().len()),
        ..MergeOutcome::default()
    };

    for seat in index.seats() {
        let record = bridge
            .record_at(&seat.coordinate_key())
            .and_then(|i| records.get(i));

        let cell = match record {
            Some(record) => {
                outcome.matched_seats += 1;
                let cell = matched_cell(seat, record, index.group_colors(), diagnostics);
                if cell.is_filled() {
                    outcome.filled_seats += 1;
                }
                cell
            }
            None => MergedCell {
                seat_key: seat.key.clone(),
                row: seat.row,
                col: seat.col,
                group_name: seat.group_name.clone(),
                value: None,
                fill: seat_color(seat, diagnostics),
            },
        };

        outcome.cells.push(cell);
    }

    tracing::debug!(
        seats = outcome.cells.len(),
        matched = outcome.matched_seats,
        filled = outcome.filled_seats,
        "Merged layout with seat records"
    );

    outcome
}

fn matched_cell(
    seat: &LayoutSeat,
    record: &SeatRecord,
    group_colors: &GroupColorTable,
    diagnostics: &mut Diagnostics,
) -> MergedCell {
    let fill = group_colors
        .get(&record.partition)
        .or_else(|| seat_color(seat, diagnostics))
        .unwrap_or(CanonicalColor::WHITE);

    let value = if record.occupant.trim().is_empty() {
        None
    } else {
        Some(record.occupant.clone())
    };

    MergedCell {
        seat_key: seat.key.clone(),
        row: seat.row,
        col: seat.col,
        group_name: seat.group_name.clone(),
        value,
        fill: Some(fill),
    }
}

/// Normalized declared color of a seat, if it has one.
fn seat_color(seat: &LayoutSeat, diagnostics: &mut Diagnostics) -> Option<CanonicalColor> {
    let raw = seat.color.as_deref()?;
    let (color, warning) = CanonicalColor::normalize(raw);
    diagnostics.extend(warning.map(|w| w.with_context(format!("layout seat '{}'", seat.key))));
    Some(color)
}
