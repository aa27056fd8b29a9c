//! Color command: show how color strings are normalized.

use crate::cli::common::{CliError, CliResult};
use crate::models::CanonicalColor;
use clap::Args;
use serde::Serialize;

/// Normalize color strings to the ARGB form used in output fills
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Colors to normalize (#RRGGBB, RRGGBB, #RGB, RGB or AARRGGBB)
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct ColorOutput {
    input: String,
    argb: String,
    rgb: String,
    valid: bool,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        let results: Vec<ColorOutput> = self
            .values
            .iter()
            .map(String::as_str)
            .map(normalize)
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&results)
                .map_err(|e| CliError::io(format!("Failed to serialize colors: {e}")))?;
            println!("{json}");
        } else {
            for result in &results {
                if result.valid {
                    println!("{} → {}", result.input, result.argb);
                } else {
                    println!("{} → {} (malformed, using white)", result.input, result.argb);
                }
            }
        }

        Ok(())
    }
}

fn normalize(value: &str) -> ColorOutput {
    let (color, warning) = CanonicalColor::normalize(value);
    ColorOutput {
        input: value.to_string(),
        argb: color.to_argb_hex(),
        rgb: color.to_rgb_hex(),
        valid: warning.is_none(),
    }
}
