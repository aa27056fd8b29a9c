//! Mapping between tabular seat identifiers and layout coordinate keys.
//!
//! Tabular sources name seats `"row-col"`; layout positions are keyed
//! `"row_col"`. The bridge rewrites one into the other once and keeps only
//! the inverse, so the merge can look up a layout position in constant time.

use std::collections::{HashMap, HashSet};

use crate::models::seat::IDENTIFIER_SEPARATOR;
use crate::models::{CoordinateKey, Diagnostic, DiagnosticKind, Diagnostics, SeatRecord};

/// Outcome of translating a single identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierMapping {
    /// Two-part identifier rewritten to a coordinate key
    Mapped(CoordinateKey),
    /// No separator: not a positional identifier, silently skipped
    NoSeparator,
    /// Separator present but not exactly two non-empty parts
    Rejected,
}

/// Translates a tabular identifier into a coordinate key.
///
/// `"2-5"` maps to `"2_5"`. Identifiers without a hyphen are not
/// positional. Identifiers such as `"1-2-3"` or `"-4"` are rejected instead
/// of being truncated to their first two parts.
///
/// # Examples
///
/// ```
/// use seatchart::services::identifier_bridge::{map_identifier, IdentifierMapping};
///
/// match map_identifier("2-5") {
///     IdentifierMapping::Mapped(key) => assert_eq!(key.as_str(), "2_5"),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(map_identifier("abc"), IdentifierMapping::NoSeparator);
/// assert_eq!(map_identifier("1-2-3"), IdentifierMapping::Rejected);
/// ```
#[must_use]
pub fn map_identifier(identifier: &str) -> IdentifierMapping {
    let identifier = identifier.trim();
    if !identifier.contains(IDENTIFIER_SEPARATOR) {
        return IdentifierMapping::NoSeparator;
    }

    let parts: Vec<&str> = identifier.split(IDENTIFIER_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [row, col] if !row.is_empty() && !col.is_empty() => {
            IdentifierMapping::Mapped(CoordinateKey::from_parts(row, col))
        }
        _ => IdentifierMapping::Rejected,
    }
}

/// Coordinate-to-row mapping built from the tabular rows.
#[derive(Debug, Clone, Default)]
pub struct IdentifierBridge {
    mapped: HashSet<String>,
    reverse: HashMap<CoordinateKey, usize>,
}

impl IdentifierBridge {
    /// Builds the bridge from seat records.
    ///
    /// When an identifier repeats, its first row is the one matched. When two
    /// different identifiers produce the same coordinate key, the first one
    /// wins. Rejected identifiers are reported as
    /// [`DiagnosticKind::RejectedIdentifier`].
    pub fn build(records: &[SeatRecord], diagnostics: &mut Diagnostics) -> Self {
        let mut bridge = Self::default();

        for (index, record) in records.iter().enumerate() {
            if bridge.mapped.contains(&record.identifier) {
                continue;
            }

            match map_identifier(&record.identifier) {
                IdentifierMapping::Mapped(key) => {
                    bridge.reverse.entry(key).or_insert(index);
                    bridge.mapped.insert(record.identifier.clone());
                }
                IdentifierMapping::NoSeparator => {}
                IdentifierMapping::Rejected => diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::RejectedIdentifier,
                        format!(
                            "Seat identifier '{}' is not in row-column form; row ignored",
                            record.identifier
                        ),
                    )
                    .with_context(format!("tabular row {}", index + 1)),
                ),
            }
        }

        tracing::debug!(
            records = records.len(),
            mapped = bridge.mapped.len(),
            "Built identifier bridge"
        );

        bridge
    }

    /// Index of the tabular record placed at a coordinate.
    #[must_use]
    pub fn record_at(&self, key: &CoordinateKey) -> Option<usize> {
        self.reverse.get(key).copied()
    }

    /// Number of mapped identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapped.len()
    }

    /// Returns true when no identifier could be mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty()
    }
}
