//! Layout definition parser.
//!
//! The layout source is a JSON object mapping opaque seat keys to seat
//! objects:
//!
//! ```json
//! {
//!   "s1": { "row": 1, "col": 1, "groupName": "A", "color": "#ff0000" },
//!   "s2": { "row": 1, "col": 2 }
//! }
//! ```
//!
//! Object order is preserved because group colors are first-seen-wins.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, SeatChartError};
use crate::models::{GridExtent, LayoutSeat};

/// Seat object as written in the layout document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayoutSeat {
    row: u32,
    col: u32,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Parses layout JSON text into seats, in document order.
///
/// # Errors
///
/// Returns [`SeatChartError::Decode`] for malformed JSON, a non-object root
/// or mistyped fields, and [`SeatChartError::InvalidCoordinate`] for a seat
/// at row or column 0.
pub fn parse_layout_json(content: &str) -> Result<Vec<LayoutSeat>> {
    let raw: IndexMap<String, RawLayoutSeat> = serde_json::from_str(content)?;

    raw.into_iter()
        .map(|(key, seat)| {
            if seat.row == 0 || seat.col == 0 {
                return Err(SeatChartError::InvalidCoordinate {
                    key,
                    row: seat.row,
                    col: seat.col,
                });
            }
            if !GridExtent::contains(seat.row, seat.col) {
                return Err(SeatChartError::out_of_range(key, seat.row, seat.col));
            }

            let mut layout_seat = LayoutSeat::new(key, seat.row, seat.col);
            if let Some(group) = seat.group_name {
                layout_seat = layout_seat.with_group(group);
            }
            if let Some(color) = seat.color {
                layout_seat = layout_seat.with_color(color);
            }
            Ok(layout_seat)
        })
        .collect()
}

/// Decodes raw layout bytes as UTF-8 (tolerating a BOM) and parses them.
///
/// # Errors
///
/// Returns [`SeatChartError::Decode`] if the bytes are not valid UTF-8, plus
/// everything [`parse_layout_json`] can return.
pub fn parse_layout_bytes(bytes: &[u8]) -> Result<Vec<LayoutSeat>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SeatChartError::Decode(format!("layout is not valid UTF-8: {e}")))?;
    parse_layout_json(text.strip_prefix('\u{feff}').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let json = r##"{
            "z": {"row": 2, "col": 1, "groupName": "B", "color": "#00ff00"},
            "a": {"row": 1, "col": 1, "groupName": "A", "color": "#ff0000"},
            "m": {"row": 1, "col": 2}
        }"##;

        let seats = parse_layout_json(json).unwrap();
        let keys: Vec<&str> = seats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);

        assert_eq!(seats[0].group_name.as_deref(), Some("B"));
        assert_eq!(seats[0].color.as_deref(), Some("#00ff00"));
        assert!(seats[2].group_name.is_none());
        assert!(seats[2].color.is_none());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let seats =
            parse_layout_json(r#"{"s": {"row": 1, "col": 1, "groupName": "", "color": ""}}"#)
                .unwrap();
        assert!(seats[0].group_name.is_none());
        assert!(seats[0].color.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let seats =
            parse_layout_json(r#"{"s": {"row": 3, "col": 4, "label": "x", "status": 1}}"#)
                .unwrap();
        assert_eq!((seats[0].row, seats[0].col), (3, 4));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = parse_layout_json("{\"s\": {\"row\": 1,").unwrap_err();
        assert!(matches!(err, SeatChartError::Decode(_)));

        let err = parse_layout_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SeatChartError::Decode(_)));

        let err = parse_layout_json(r#"{"s": {"row": "1", "col": 1}}"#).unwrap_err();
        assert!(matches!(err, SeatChartError::Decode(_)));

        let err = parse_layout_json(r#"{"s": {"col": 1}}"#).unwrap_err();
        assert!(matches!(err, SeatChartError::Decode(_)));
    }

    #[test]
    fn test_zero_coordinate_rejected() {
        let err = parse_layout_json(r#"{"s9": {"row": 0, "col": 1}}"#).unwrap_err();
        match err {
            SeatChartError::InvalidCoordinate { key, row, col } => {
                assert_eq!(key, "s9");
                assert_eq!((row, col), (0, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_position_past_sheet_limits_rejected() {
        for json in [
            r#"{"s": {"row": 1, "col": 16384}}"#,
            r#"{"s": {"row": 1, "col": 16385}}"#,
            r#"{"s": {"row": 1, "col": 4294967295}}"#,
            r#"{"s": {"row": 1048573, "col": 1}}"#,
        ] {
            let err = parse_layout_json(json).unwrap_err();
            assert!(
                matches!(err, SeatChartError::CoordinateOutOfRange { .. }),
                "{json}: {err}"
            );
        }

        let seats = parse_layout_json(r#"{"s": {"row": 1048572, "col": 16383}}"#).unwrap();
        assert_eq!((seats[0].row, seats[0].col), (1_048_572, 16_383));
    }

    #[test]
    fn test_bytes_with_bom_and_invalid_utf8() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(br#"{"s": {"row": 1, "col": 1}}"#);
        assert_eq!(parse_layout_bytes(&bytes).unwrap().len(), 1);

        let err = parse_layout_bytes(&[0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, SeatChartError::Decode(_)));
    }

    #[test]
    fn test_empty_object() {
        assert!(parse_layout_json("{}").unwrap().is_empty());
    }
}
