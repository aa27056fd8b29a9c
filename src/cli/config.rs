//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{validate_sheet_name, Config};
use crate::export::OutputFormat;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Whether seat files start with a header row
    #[arg(long, value_name = "BOOL")]
    has_header: Option<bool>,

    /// Worksheet to read from spreadsheet inputs
    #[arg(long, value_name = "NAME", value_parser = parse_sheet_name)]
    sheet: Option<String>,

    /// Default output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Title written above the grid
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Name of the grid sheet
    #[arg(long, value_name = "NAME", value_parser = parse_sheet_name)]
    layout_sheet: Option<String>,

    /// Name of the legend sheet
    #[arg(long, value_name = "NAME", value_parser = parse_sheet_name)]
    legend_sheet: Option<String>,

    /// Width of grid columns
    #[arg(long, value_name = "WIDTH")]
    column_width: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.has_header.is_none()
            && self.sheet.is_none()
            && self.format.is_none()
            && self.title.is_none()
            && self.layout_sheet.is_none()
            && self.legend_sheet.is_none()
            && self.column_width.is_none()
    }

    /// Applies the given values to `config` and validates the result.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(has_header) = self.has_header {
            config.input.has_header = has_header;
        }
        if let Some(sheet) = &self.sheet {
            config.input.sheet = Some(sheet.clone());
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(title) = &self.title {
            config.output.title.clone_from(title);
        }
        if let Some(name) = &self.layout_sheet {
            config.output.layout_sheet.clone_from(name);
        }
        if let Some(name) = &self.legend_sheet {
            config.output.legend_sheet.clone_from(name);
        }
        if let Some(width) = self.column_width {
            config.output.column_width = width;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --has-header, --sheet, \
                 --format, --title, --layout-sheet, --legend-sheet, or --column-width",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_sheet_name(value: &str) -> Result<String, String> {
    validate_sheet_name("sheet name", value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("SeatChart Configuration");
    println!("=======================");
    println!();

    println!("Input:");
    println!("  Has Header: {}", config.input.has_header);
    println!(
        "  Sheet: {}",
        config.input.sheet.as_deref().unwrap_or("(first sheet)")
    );
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format.extension());
    println!("  Title: {}", config.output.title);
    println!("  Layout Sheet: {}", config.output.layout_sheet);
    println!("  Legend Sheet: {}", config.output.legend_sheet);
    println!("  Column Width: {}", config.output.column_width);
    println!();
}
