//! Configuration model for the form input design generator.

use super::color::HexColor;
use serde::{Deserialize, Serialize};

/// Valid border radius range in pixels.
pub const RADIUS_RANGE: (u32, u32) = (0, 30);

/// Fallback text used when the configured label is empty.
pub const DEFAULT_LABEL: &str = "Label";
/// Placeholder shown for select inputs when none is configured.
pub const DEFAULT_SELECT_PLACEHOLDER: &str = "Select an option";

/// A sample choice rendered for select, radio, and checkbox inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOption {
    /// Submitted form value
    pub value: &'static str,
    /// Visible label
    pub label: &'static str,
}

/// Fixed sample options used by grouped and select inputs.
pub const SAMPLE_OPTIONS: &[SampleOption] = &[
    SampleOption { value: "option1", label: "Option 1" },
    SampleOption { value: "option2", label: "Option 2" },
    SampleOption { value: "option3", label: "Option 3" },
];

/// The kind of form control being designed.
///
/// Unrecognized kind names fall back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Single-line text input
    #[default]
    Text,
    /// Email input
    Email,
    /// Password input
    Password,
    /// Numeric input
    Number,
    /// Telephone input
    Tel,
    /// Date picker
    Date,
    /// Time picker
    Time,
    /// Dropdown select
    Select,
    /// Multi-line textarea
    Textarea,
    /// Radio button group
    Radio,
    /// Checkbox group
    Checkbox,
}

impl InputKind {
    /// All kinds, in UI cycle order.
    pub const ALL: [Self; 11] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Date,
        Self::Time,
        Self::Select,
        Self::Textarea,
        Self::Radio,
        Self::Checkbox,
    ];

    /// Returns the lowercase kind name (also the HTML `type` attribute
    /// for the text-like kinds).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Time => "time",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// Parses a kind name, falling back to `Text` for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "tel" => Self::Tel,
            "date" => Self::Date,
            "time" => Self::Time,
            "select" => Self::Select,
            "textarea" => Self::Textarea,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            _ => Self::Text,
        }
    }

    /// Whether this kind renders a group of sample options rather than a
    /// single control.
    #[must_use]
    pub const fn is_grouped(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    /// Whether this kind is a plain `<input>` element.
    #[must_use]
    pub const fn is_text_like(self) -> bool {
        !matches!(self, Self::Select | Self::Textarea | Self::Radio | Self::Checkbox)
    }

    /// Font Awesome icon class paired with this kind.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Password => "fa-lock",
            Self::Email => "fa-envelope",
            Self::Number => "fa-hashtag",
            Self::Tel => "fa-phone",
            Self::Date => "fa-calendar",
            Self::Time => "fa-clock",
            _ => "fa-user",
        }
    }

    /// Returns the next kind in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous kind in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current parameter values for the form input generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    label: String,
    placeholder: String,
    border_radius: u32,
    /// Control kind
    pub kind: InputKind,
    /// Whether the control carries the `required` attribute
    pub required: bool,
    /// Whether the control carries the `disabled` attribute
    pub disabled: bool,
    /// Whether text-like inputs are wrapped with a leading icon
    pub add_icon: bool,
    /// Text color
    pub text_color: HexColor,
    /// Background color
    pub bg_color: HexColor,
    /// Resting border color
    pub border_color: HexColor,
    /// Focus ring / accent color
    pub focus_color: HexColor,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            label: "Username".to_string(),
            placeholder: "Enter your username".to_string(),
            border_radius: 8,
            kind: InputKind::Text,
            required: true,
            disabled: false,
            add_icon: false,
            text_color: HexColor::new(0x1a, 0x1a, 0x2e),
            bg_color: HexColor::new(0xff, 0xff, 0xff),
            border_color: HexColor::new(0xdd, 0xdd, 0xdd),
            focus_color: HexColor::new(0x43, 0x61, 0xee),
        }
    }
}

impl InputConfig {
    /// Label text with the documented fallback substituted when empty.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.label.trim().is_empty() {
            DEFAULT_LABEL
        } else {
            &self.label
        }
    }

    /// Raw label text as typed, possibly empty.
    #[must_use]
    pub fn raw_label(&self) -> &str {
        &self.label
    }

    /// Sets the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Placeholder text, possibly empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Placeholder for select inputs, with its own fallback.
    #[must_use]
    pub fn select_placeholder(&self) -> &str {
        if self.placeholder.trim().is_empty() {
            DEFAULT_SELECT_PLACEHOLDER
        } else {
            &self.placeholder
        }
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Border radius in pixels.
    #[must_use]
    pub const fn border_radius(&self) -> u32 {
        self.border_radius
    }

    /// Sets the border radius, clamping to `RADIUS_RANGE`.
    pub fn set_border_radius(&mut self, radius: u32) {
        self.border_radius = radius.clamp(RADIUS_RANGE.0, RADIUS_RANGE.1);
    }

    /// Restores every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
