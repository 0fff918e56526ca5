//! 24-bit RGB colors with hex and packed-integer forms.

// Channel packing casts are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

use crate::error::{LayoutError, LayoutResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value a packed 24-bit color can take.
pub const MAX_PACKED_COLOR: u32 = 0x00FF_FFFF;

/// RGB color value.
///
/// Persisted layouts store colors as packed integers (`0xRRGGBB`); the CLI
/// reads and prints `#RRGGBB` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomplanner::models::RgbColor;
    ///
    /// let color = RgbColor::from_u24(0x112233).unwrap();
    /// assert_eq!(color, RgbColor::new(0x11, 0x22, 0x33));
    /// assert!(RgbColor::from_u24(0x0100_0000).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidColor`] if the value exceeds 24 bits.
    pub fn from_u24(value: u32) -> LayoutResult<Self> {
        if value > MAX_PACKED_COLOR {
            return Err(LayoutError::InvalidColor(value.to_string()));
        }
        Ok(Self::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Packs the color as `0xRRGGBB`.
    #[must_use]
    pub const fn to_u24(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use roomplanner::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#CCCCCC").unwrap();
    /// assert_eq!(color.to_u24(), 0xCCCCCC);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> LayoutResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LayoutError::InvalidColor(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| LayoutError::InvalidColor(hex.to_string()))?;
        Self::from_u24(value)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Picks a uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Light gray (#CCCCCC), the stock wall color.
    fn default() -> Self {
        Self::new(0xCC, 0xCC, 0xCC)
    }
}
