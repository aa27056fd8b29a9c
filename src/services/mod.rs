//! Service layer for the merge pipeline.
//!
//! Each stage is its own module; [`SeatChartService`] wires them together
//! and [`inputs`] handles reading the source files.

pub mod chart;
pub mod identifier_bridge;
pub mod inputs;
pub mod layout_index;
pub mod legend;
pub mod merge;

// Re-export commonly used types and functions
pub use chart::SeatChartService;
pub use identifier_bridge::IdentifierBridge;
pub use layout_index::{GroupColorTable, LayoutIndex};
pub use merge::MergeOutcome;
