//! SeatChart - merge a seat layout with seat assignments into a colored chart
//!
//! Reads a JSON layout of seats and a tabular file of assignments, then writes
//! a workbook (or JSON/markdown) with each seat filled by its group color.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seatchart::cli::{CliResult, ColorArgs, ConfigArgs, ExitCode, GenerateArgs, InspectArgs};

/// SeatChart - colored seating charts from a layout and an assignment table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge inputs and write the seat chart
    Generate(GenerateArgs),
    /// Merge inputs and print statistics and warnings
    Inspect(InspectArgs),
    /// Normalize color strings
    Color(ColorArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Color(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --json output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success.code(),
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    std::process::exit(code);
}
