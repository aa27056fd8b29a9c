//! CLI command handlers for SeatChart.
//!
//! Each subcommand is an `Args` struct with an `execute()` method returning
//! [`CliResult`]; `main` maps errors to process exit codes.

pub mod color;
pub mod common;
pub mod config;
pub mod generate;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode, InputArgs};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
