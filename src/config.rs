//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::export::OutputFormat;

/// Longest sheet name a workbook accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters a workbook forbids in sheet names.
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// How seat record files are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Skip the first row of seat record files
    pub has_header: bool,
    /// Worksheet to read from spreadsheet inputs (first sheet when unset)
    pub sheet: Option<String>,
}

/// How the merged chart is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: OutputFormat,
    /// Title written above the grid
    pub title: String,
    /// Name of the grid sheet
    pub layout_sheet: String,
    /// Name of the legend sheet
    pub legend_sheet: String,
    /// Width of grid columns, in character units
    pub column_width: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            title: "Seat Layout".to_string(),
            layout_sheet: "Seat Layout".to_string(),
            legend_sheet: "Legend".to_string(),
            column_width: 15.0,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SeatChart/config.toml`
/// - macOS: `~/Library/Application Support/SeatChart/config.toml`
/// - Windows: `%APPDATA%\SeatChart\config.toml`
///
/// `SEATCHART_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - sheet names must be 1-31 characters without `[ ] : * ? / \`
/// - sheet names must differ from each other
/// - `column_width` must be a positive number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Seat record reading
    pub input: InputConfig,
    /// Chart output
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "Saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_sheet_name("layout_sheet", &self.output.layout_sheet)?;
        validate_sheet_name("legend_sheet", &self.output.legend_sheet)?;

        if self.output.layout_sheet.eq_ignore_ascii_case(&self.output.legend_sheet) {
            anyhow::bail!(
                "layout_sheet and legend_sheet must differ, both are '{}'",
                self.output.layout_sheet
            );
        }

        if !(self.output.column_width.is_finite() && self.output.column_width > 0.0) {
            anyhow::bail!(
                "column_width must be a positive number, got {}",
                self.output.column_width
            );
        }

        if let Some(sheet) = &self.input.sheet {
            if sheet.trim().is_empty() {
                anyhow::bail!("input sheet name cannot be empty");
            }
        }

        Ok(())
    }
}

/// Checks a worksheet name against workbook naming rules.
pub fn validate_sheet_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("{field} cannot be empty");
    }

    if name.chars().count() > MAX_SHEET_NAME_LEN {
        anyhow::bail!("{field} '{name}' is longer than {MAX_SHEET_NAME_LEN} characters");
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        anyhow::bail!("{field} '{name}' contains forbidden character '{c}'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert!(!config.input.has_header);
        assert_eq!(config.input.sheet, None);
        assert_eq!(config.output.format, OutputFormat::Xlsx);
        assert_eq!(config.output.legend_sheet, "Legend");
        assert!((config.output.column_width - 15.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [input]
            has_header = true

            [output]
            format = "markdown"
            "#,
        )
        .unwrap();

        assert!(config.input.has_header);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.output.title, "Seat Layout");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::new();
        config.input.sheet = Some("Seats".to_string());
        config.output.title = "Graduation".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_validate_sheet_names() {
        assert!(validate_sheet_name("sheet", "Seats 2024").is_ok());
        assert!(validate_sheet_name("sheet", "").is_err());
        assert!(validate_sheet_name("sheet", "a/b").is_err());
        assert!(validate_sheet_name("sheet", "what?").is_err());
        assert!(validate_sheet_name("sheet", &"x".repeat(32)).is_err());
        assert!(validate_sheet_name("sheet", &"x".repeat(31)).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_output() {
        let mut config = Config::new();
        config.output.column_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.output.legend_sheet = config.output.layout_sheet.clone();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.input.sheet = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_format_fails_to_parse() {
        let err = Config::from_toml("[output]\nformat = \"pdf\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
