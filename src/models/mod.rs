//! Data models for seat records, layout seats, colors and merge results.
//!
//! Models carry no I/O. Parsers in [`crate::parser`] build them from input
//! documents and services in [`crate::services`] transform them.

pub mod chart;
pub mod color;
pub mod diagnostic;
pub mod grid;
pub mod legend;
pub mod seat;

// Re-export all model types
pub use chart::{ChartStats, SeatChart};
pub use color::CanonicalColor;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use grid::{GridExtent, MergedCell};
pub use legend::{GroupLegendEntry, Legend, PartitionLegendEntry};
pub use seat::{CoordinateKey, LayoutSeat, SeatRecord};
