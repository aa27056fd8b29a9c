//! Canonical ARGB color handling with lenient hex parsing.

// Channel extraction shifts are intentional
#![allow(clippy::cast_possible_truncation)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::{Diagnostic, DiagnosticKind};

/// Accepted encodings: bare `AARRGGBB`, `#RRGGBB`/`RRGGBB`, `#RGB`/`RGB`.
static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<argb>[0-9A-Fa-f]{8})|#?(?P<rgb>[0-9A-Fa-f]{6})|#?(?P<short>[0-9A-Fa-f]{3}))$",
    )
    .expect("color pattern is valid")
});

/// Color with an alpha channel, rendered as eight uppercase hex digits
/// (`AARRGGBB`, alpha first).
///
/// Every color that reaches the merged grid or the legend goes through
/// [`CanonicalColor::normalize`], so the string form always matches
/// `^[0-9A-F]{8}$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CanonicalColor {
    /// Alpha channel (0-255, 255 = opaque)
    pub a: u8,
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl CanonicalColor {
    /// Opaque white, used whenever a color cannot be determined.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);

    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    /// Parses a color in one of the recognized encodings.
    ///
    /// Supports "AARRGGBB", "#RRGGBB", "RRGGBB", "#RGB" and "RGB" in any
    /// letter case. Surrounding whitespace is ignored. Note that an
    /// eight-digit value is only accepted without a `#` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatchart::models::CanonicalColor;
    ///
    /// assert_eq!(CanonicalColor::parse("#f00"), Some(CanonicalColor::opaque(255, 0, 0)));
    /// assert_eq!(CanonicalColor::parse("80112233"), Some(CanonicalColor::new(0x80, 0x11, 0x22, 0x33)));
    /// assert_eq!(CanonicalColor::parse("blue"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = COLOR_PATTERN.captures(raw.trim())?;

        if let Some(argb) = caps.name("argb") {
            let value = u32::from_str_radix(argb.as_str(), 16).ok()?;
            return Some(Self::from_argb(value));
        }

        if let Some(rgb) = caps.name("rgb") {
            let value = u32::from_str_radix(rgb.as_str(), 16).ok()?;
            return Some(Self::from_argb(0xFF00_0000 | value));
        }

        let short = caps.name("short")?.as_str();
        let mut nibbles = short.chars().filter_map(|c| c.to_digit(16));
        let mut expand = || nibbles.next().map(|n| (n * 0x11) as u8);
        Some(Self::opaque(expand()?, expand()?, expand()?))
    }

    /// Canonicalizes an arbitrary color string.
    ///
    /// Never fails: input outside the recognized encodings yields
    /// [`CanonicalColor::WHITE`] together with a
    /// [`DiagnosticKind::MalformedColor`] warning for the caller to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatchart::models::CanonicalColor;
    ///
    /// let (color, warning) = CanonicalColor::normalize("#00ff00");
    /// assert_eq!(color.to_string(), "FF00FF00");
    /// assert!(warning.is_none());
    ///
    /// let (color, warning) = CanonicalColor::normalize("blue");
    /// assert_eq!(color, CanonicalColor::WHITE);
    /// assert!(warning.is_some());
    /// ```
    pub fn normalize(raw: &str) -> (Self, Option<Diagnostic>) {
        match Self::parse(raw) {
            Some(color) => (color, None),
            None => (
                Self::WHITE,
                Some(Diagnostic::new(
                    DiagnosticKind::MalformedColor,
                    format!("Unrecognized color format '{raw}', using default white"),
                )),
            ),
        }
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    /// Converts the color to its canonical "AARRGGBB" string (uppercase).
    #[must_use]
    pub fn to_argb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Converts the color to "#RRGGBB", dropping alpha.
    #[must_use]
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_argb_hex())
    }
}

impl Default for CanonicalColor {
    /// Default color is opaque white (FFFFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<CanonicalColor> for String {
    fn from(color: CanonicalColor) -> Self {
        color.to_argb_hex()
    }
}

impl TryFrom<String> for CanonicalColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(s: &str) -> bool {
        s.len() == 8
            && s
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn test_eight_digits_uppercased_as_is() {
        let (color, warning) = CanonicalColor::normalize("80ab12cd");
        assert_eq!(color.to_string(), "80AB12CD");
        assert!(warning.is_none());
    }

    #[test]
    fn test_six_digits_get_opaque_alpha() {
        assert_eq!(CanonicalColor::normalize("#ff0000").0.to_string(), "FFFF0000");
        assert_eq!(CanonicalColor::normalize("00ff00").0.to_string(), "FF00FF00");
        assert_eq!(CanonicalColor::normalize("#A1b2C3").0.to_string(), "FFA1B2C3");
    }

    #[test]
    fn test_three_digits_expand_nibbles() {
        assert_eq!(CanonicalColor::normalize("#abc").0.to_string(), "FFAABBCC");
        assert_eq!(CanonicalColor::normalize("f0a").0.to_string(), "FFFF00AA");
    }

    #[test]
    fn test_unrecognized_defaults_to_white_with_warning() {
        for raw in ["blue", "", "12345", "#FF00FF00", "#12", "GGGGGG", "rgb(1,2,3)"] {
            let (color, warning) = CanonicalColor::normalize(raw);
            assert_eq!(color.to_string(), "FFFFFFFF", "input {raw:?}");
            let warning = warning.expect("malformed input must warn");
            assert_eq!(warning.kind, DiagnosticKind::MalformedColor);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            CanonicalColor::parse("  #00FF00\n"),
            Some(CanonicalColor::opaque(0, 255, 0))
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["#ff0000", "0f0", "#abc", "80ab12cd", "nonsense", "", "123456"] {
            let once = CanonicalColor::normalize(raw).0.to_string();
            let twice = CanonicalColor::normalize(&once).0.to_string();
            assert_eq!(once, twice, "input {raw:?}");
            assert!(is_canonical(&once), "{once} is not canonical");
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let color = CanonicalColor::opaque(0x12, 0x34, 0x56);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"FF123456\"");

        let back: CanonicalColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<CanonicalColor>("\"nope\"").is_err());
    }

    #[test]
    fn test_rgb_hex_drops_alpha() {
        assert_eq!(CanonicalColor::new(0x80, 1, 2, 3).to_rgb_hex(), "#010203");
    }

    #[test]
    fn test_default() {
        assert_eq!(CanonicalColor::default(), CanonicalColor::WHITE);
    }
}
