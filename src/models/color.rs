//! Hex color handling for generated CSS and preview rendering.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color stored as three 8-bit channels.
///
/// This is the canonical representation of every color field in a tool
/// configuration. The textual form is always a well-formed `#rrggbb`
/// string; parsing is forgiving and falls back to a caller-supplied
/// default rather than surfacing an error to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl HexColor {
    /// Creates a new `HexColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `HexColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use designforge::models::HexColor;
    ///
    /// let color = HexColor::from_hex("#336699").unwrap();
    /// assert_eq!(color, HexColor::new(51, 102, 153));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| anyhow::anyhow!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| anyhow::anyhow!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| anyhow::anyhow!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a hex string, substituting `fallback` for malformed input.
    ///
    /// Configuration setters use this so that a corrupted color value can
    /// never abort the configure-and-render cycle.
    #[must_use]
    pub fn from_hex_or(hex: &str, fallback: Self) -> Self {
        Self::from_hex(hex).unwrap_or(fallback)
    }

    /// Converts the color to a CSS hex string in the format "#rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use designforge::models::HexColor;
    ///
    /// assert_eq!(HexColor::new(67, 97, 238).to_hex(), "#4361ee");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a CSS `rgba()` expression at the given alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use designforge::models::HexColor;
    ///
    /// let color = HexColor::new(51, 102, 153);
    /// assert_eq!(color.to_rgba(0.2), "rgba(51, 102, 153, 0.2)");
    /// ```
    #[must_use]
    pub fn to_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Converts the color to a Ratatui color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// Used by the preview pane to approximate the translucent fill that
    /// the generated CSS expresses as an `rgba()` value.
    ///
    /// # Arguments
    ///
    /// * `percent` - Brightness percentage (0-100). 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }

    /// Returns the hover variant of this color for the "darken" effect.
    ///
    /// Not yet implemented: returns the color unchanged. The generated
    /// hover rule therefore keeps the configured background, which is the
    /// documented contract until a concrete darkening formula is chosen.
    #[must_use]
    pub const fn darken(&self, _percent: u8) -> Self {
        *self
    }

    /// Returns the hover variant of this color for the "lighten" effect.
    ///
    /// Not yet implemented: returns the color unchanged, mirroring
    /// [`HexColor::darken`].
    #[must_use]
    pub const fn lighten(&self, _percent: u8) -> Self {
        *self
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Curated palette the TUI color fields cycle through.
///
/// The first entry is the accent blue used by the default configurations.
pub const PALETTE: &[HexColor] = &[
    HexColor::new(0x43, 0x61, 0xee), // blue
    HexColor::new(0xe6, 0x39, 0x46), // red
    HexColor::new(0xf7, 0x7f, 0x00), // orange
    HexColor::new(0xfc, 0xbf, 0x49), // yellow
    HexColor::new(0x2a, 0x9d, 0x8f), // teal
    HexColor::new(0x43, 0xaa, 0x8b), // green
    HexColor::new(0x7b, 0x2c, 0xbf), // purple
    HexColor::new(0xff, 0x70, 0xa6), // pink
    HexColor::new(0x1a, 0x1a, 0x2e), // near-black
    HexColor::new(0x6c, 0x75, 0x7d), // gray
    HexColor::new(0xdd, 0xdd, 0xdd), // light gray
    HexColor::new(0xff, 0xff, 0xff), // white
];

/// Returns the palette entry following `current`, wrapping at the end.
///
/// A color that is not in the palette snaps to the first entry, so cycling
/// is total regardless of what the configuration currently holds.
#[must_use]
pub fn palette_next(current: HexColor) -> HexColor {
    match PALETTE.iter().position(|c| *c == current) {
        Some(i) => PALETTE[(i + 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}

/// Returns the palette entry preceding `current`, wrapping at the start.
#[must_use]
pub fn palette_prev(current: HexColor) -> HexColor {
    match PALETTE.iter().position(|c| *c == current) {
        Some(i) => PALETTE[(i + PALETTE.len() - 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}
