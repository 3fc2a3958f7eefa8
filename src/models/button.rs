//! Configuration model for the button design generator.

use super::color::HexColor;
use serde::{Deserialize, Serialize};

/// Valid button width range in pixels.
pub const WIDTH_RANGE: (u32, u32) = (60, 400);
/// Valid button height range in pixels.
pub const HEIGHT_RANGE: (u32, u32) = (24, 160);
/// Valid border radius range in pixels.
pub const RADIUS_RANGE: (u32, u32) = (0, 50);
/// Valid border width range in pixels.
pub const BORDER_WIDTH_RANGE: (u32, u32) = (0, 10);

/// Fallback label used when the configured button text is empty.
pub const DEFAULT_BUTTON_TEXT: &str = "Click Me";

/// Hover behavior emitted into the generated `:hover` rule.
///
/// `Darken` and `Lighten` rely on [`HexColor::darken`] and
/// [`HexColor::lighten`], which are currently pass-through stubs; their
/// hover rules keep the configured background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
    /// No hover change
    #[default]
    None,
    /// Darkened background (stubbed, see type docs)
    Darken,
    /// Lightened background (stubbed, see type docs)
    Lighten,
    /// Scale up to 105%
    Grow,
    /// Scale down to 95%
    Shrink,
    /// Rotate by 5 degrees
    Rotate,
}

impl HoverEffect {
    /// All effects, in UI cycle order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Darken,
        Self::Lighten,
        Self::Grow,
        Self::Shrink,
        Self::Rotate,
    ];

    /// Returns the lowercase effect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
            Self::Rotate => "rotate",
        }
    }

    /// Parses an effect name, falling back to `None` for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "darken" => Self::Darken,
            "lighten" => Self::Lighten,
            "grow" => Self::Grow,
            "shrink" => Self::Shrink,
            "rotate" => Self::Rotate,
            _ => Self::None,
        }
    }

    /// Returns the next effect in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous effect in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Font Awesome icon appended to the button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonIcon {
    /// fa-heart
    #[default]
    Heart,
    /// fa-star
    Star,
    /// fa-check
    Check,
    /// fa-arrow-right
    ArrowRight,
    /// fa-download
    Download,
}

impl ButtonIcon {
    /// All icons, in UI cycle order.
    pub const ALL: [Self; 5] = [
        Self::Heart,
        Self::Star,
        Self::Check,
        Self::ArrowRight,
        Self::Download,
    ];

    /// Returns the Font Awesome class for this icon.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Heart => "fa-heart",
            Self::Star => "fa-star",
            Self::Check => "fa-check",
            Self::ArrowRight => "fa-arrow-right",
            Self::Download => "fa-download",
        }
    }

    /// Lowercase icon name used by the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Check => "check",
            Self::ArrowRight => "arrow-right",
            Self::Download => "download",
        }
    }

    /// Parses an icon name, falling back to `Heart`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "star" => Self::Star,
            "check" => Self::Check,
            "arrow-right" => Self::ArrowRight,
            "download" => Self::Download,
            _ => Self::Heart,
        }
    }

    /// Returns the next icon in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous icon in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current parameter values for the button generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    text: String,
    width: u32,
    height: u32,
    border_radius: u32,
    border_width: u32,
    /// Background color
    pub bg_color: HexColor,
    /// Label text color
    pub text_color: HexColor,
    /// Border color
    pub border_color: HexColor,
    /// Whether to emit a drop shadow
    pub add_shadow: bool,
    /// Hover behavior
    pub hover_effect: HoverEffect,
    /// Whether to emit the pulse keyframe animation
    pub pulse_animation: bool,
    /// Whether to append an icon after the label
    pub add_icon: bool,
    /// Which icon to append when `add_icon` is set
    pub icon: ButtonIcon,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_BUTTON_TEXT.to_string(),
            width: 160,
            height: 48,
            border_radius: 8,
            border_width: 2,
            bg_color: HexColor::new(0x43, 0x61, 0xee),
            text_color: HexColor::new(0xff, 0xff, 0xff),
            border_color: HexColor::new(0x43, 0x61, 0xee),
            add_shadow: false,
            hover_effect: HoverEffect::None,
            pulse_animation: false,
            add_icon: false,
            icon: ButtonIcon::Heart,
        }
    }
}

impl ButtonConfig {
    /// Button label with the documented fallback substituted when empty.
    #[must_use]
    pub fn text(&self) -> &str {
        if self.text.trim().is_empty() {
            DEFAULT_BUTTON_TEXT
        } else {
            &self.text
        }
    }

    /// Raw label text as typed, possibly empty.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    /// Sets the label text. Emptiness is handled at read time.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Button width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Button height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Border radius in pixels.
    #[must_use]
    pub const fn border_radius(&self) -> u32 {
        self.border_radius
    }

    /// Border width in pixels.
    #[must_use]
    pub const fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Sets the width, clamping to `WIDTH_RANGE`.
    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1);
    }

    /// Sets the height, clamping to `HEIGHT_RANGE`.
    pub fn set_height(&mut self, height: u32) {
        self.height = height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1);
    }

    /// Sets the border radius, clamping to `RADIUS_RANGE`.
    pub fn set_border_radius(&mut self, radius: u32) {
        self.border_radius = radius.clamp(RADIUS_RANGE.0, RADIUS_RANGE.1);
    }

    /// Sets the border width, clamping to `BORDER_WIDTH_RANGE`.
    pub fn set_border_width(&mut self, width: u32) {
        self.border_width = width.clamp(BORDER_WIDTH_RANGE.0, BORDER_WIDTH_RANGE.1);
    }

    /// Font size derived from the height: `min(16, height / 3)`.
    #[must_use]
    pub const fn font_size(&self) -> u32 {
        let derived = self.height / 3;
        if derived > 16 {
            16
        } else {
            derived
        }
    }

    /// Restores every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
