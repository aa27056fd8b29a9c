//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "SeatChart";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "seatchart";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "SeatChart";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SEATCHART_CONFIG_DIR";

/// Stem of the generated file name when `--output` is omitted.
pub const DEFAULT_OUTPUT_STEM: &str = "seat_layout";
