//! SeatChart Library
//!
//! This library merges a seat layout (seats with grid positions, groups and
//! colors) with a table of seat assignments, and renders the result as a
//! colored workbook, JSON or markdown.
//!
//! The pipeline runs in [`services::SeatChartService::build`]; input parsing
//! lives in [`parser`] and output sinks in [`export`].

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
