//! Control panel: the editable field list for each tool.
//!
//! Fields are a flat enum so key handling can treat every tool the same
//! way: Up/Down moves the selection, Left/Right adjusts, Enter edits
//! text fields in place.

use super::AppState;
use crate::models::{palette_next, palette_prev, HexColor};

/// One editable control in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // Grid tool
    GridRows,
    GridCols,
    GridGap,
    GridCellMin,
    GridLayout,
    GridAlign,
    GridJustify,
    GridColor,
    GridLabels,

    // Button tool
    ButtonText,
    ButtonWidth,
    ButtonHeight,
    ButtonRadius,
    ButtonBorderWidth,
    ButtonBg,
    ButtonBorderColor,
    ButtonTextColor,
    ButtonHover,
    ButtonIcon,
    ButtonShadow,
    ButtonPulse,

    // Input tool
    InputKind,
    InputLabel,
    InputPlaceholder,
    InputRequired,
    InputDisabled,
    InputRadius,
    InputIcon,
    InputTextColor,
    InputBg,
    InputBorderColor,
    InputFocusColor,
}

/// Fields shown for the grid tool, in panel order.
pub const GRID_FIELDS: &[Field] = &[
    Field::GridRows,
    Field::GridCols,
    Field::GridGap,
    Field::GridCellMin,
    Field::GridLayout,
    Field::GridAlign,
    Field::GridJustify,
    Field::GridColor,
    Field::GridLabels,
];

/// Fields shown for the button tool, in panel order.
pub const BUTTON_FIELDS: &[Field] = &[
    Field::ButtonText,
    Field::ButtonWidth,
    Field::ButtonHeight,
    Field::ButtonRadius,
    Field::ButtonBorderWidth,
    Field::ButtonBg,
    Field::ButtonBorderColor,
    Field::ButtonTextColor,
    Field::ButtonHover,
    Field::ButtonIcon,
    Field::ButtonShadow,
    Field::ButtonPulse,
];

/// Fields shown for the input tool, in panel order.
pub const INPUT_FIELDS: &[Field] = &[
    Field::InputKind,
    Field::InputLabel,
    Field::InputPlaceholder,
    Field::InputRequired,
    Field::InputDisabled,
    Field::InputRadius,
    Field::InputIcon,
    Field::InputTextColor,
    Field::InputBg,
    Field::InputBorderColor,
    Field::InputFocusColor,
];

/// Fields for a tool's control panel.
#[must_use]
pub fn fields_for(tool: crate::generator::Tool) -> &'static [Field] {
    match tool {
        crate::generator::Tool::Grid => GRID_FIELDS,
        crate::generator::Tool::Button => BUTTON_FIELDS,
        crate::generator::Tool::Input => INPUT_FIELDS,
    }
}

impl Field {
    /// Panel label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GridRows => "Rows",
            Self::GridCols => "Columns",
            Self::GridGap => "Gap",
            Self::GridCellMin => "Cell min size",
            Self::GridLayout => "Layout mode",
            Self::GridAlign => "Align items",
            Self::GridJustify => "Justify items",
            Self::GridColor => "Cell color",
            Self::GridLabels => "Cell labels",

            Self::ButtonText => "Text",
            Self::ButtonWidth => "Width",
            Self::ButtonHeight => "Height",
            Self::ButtonRadius => "Corner radius",
            Self::ButtonBorderWidth => "Border width",
            Self::ButtonBg => "Background",
            Self::ButtonBorderColor => "Border color",
            Self::ButtonTextColor => "Text color",
            Self::ButtonHover => "Hover effect",
            Self::ButtonIcon => "Icon",
            Self::ButtonShadow => "Shadow",
            Self::ButtonPulse => "Pulse animation",

            Self::InputKind => "Input type",
            Self::InputLabel => "Label",
            Self::InputPlaceholder => "Placeholder",
            Self::InputRequired => "Required",
            Self::InputDisabled => "Disabled",
            Self::InputRadius => "Corner radius",
            Self::InputIcon => "Leading icon",
            Self::InputTextColor => "Text color",
            Self::InputBg => "Background",
            Self::InputBorderColor => "Border color",
            Self::InputFocusColor => "Focus color",
        }
    }

    /// Whether Enter opens an inline text editor for this field.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::ButtonText | Self::InputLabel | Self::InputPlaceholder
        )
    }

    /// Current value rendered in the panel.
    #[must_use]
    pub fn value_text(self, state: &AppState) -> String {
        match self {
            Self::GridRows => state.grid.rows().to_string(),
            Self::GridCols => state.grid.cols().to_string(),
            Self::GridGap => format!("{}px", state.grid.gap()),
            Self::GridCellMin => format!("{}px", state.grid.cell_min()),
            Self::GridLayout => state.grid.layout_mode.name().to_string(),
            Self::GridAlign => state.grid.align_items.name().to_string(),
            Self::GridJustify => state.grid.justify_items.name().to_string(),
            Self::GridColor => state.grid.cell_color.to_hex(),
            Self::GridLabels => on_off(state.grid.show_cell_text),

            Self::ButtonText => state.button.text().to_string(),
            Self::ButtonWidth => format!("{}px", state.button.width()),
            Self::ButtonHeight => format!("{}px", state.button.height()),
            Self::ButtonRadius => format!("{}px", state.button.border_radius()),
            Self::ButtonBorderWidth => format!("{}px", state.button.border_width()),
            Self::ButtonBg => state.button.bg_color.to_hex(),
            Self::ButtonBorderColor => state.button.border_color.to_hex(),
            Self::ButtonTextColor => state.button.text_color.to_hex(),
            Self::ButtonHover => state.button.hover_effect.name().to_string(),
            Self::ButtonIcon => {
                if state.button.add_icon {
                    state.button.icon.name().to_string()
                } else {
                    "off".to_string()
                }
            }
            Self::ButtonShadow => on_off(state.button.add_shadow),
            Self::ButtonPulse => on_off(state.button.pulse_animation),

            Self::InputKind => state.input.kind.name().to_string(),
            Self::InputLabel => state.input.label().to_string(),
            Self::InputPlaceholder => state.input.placeholder().to_string(),
            Self::InputRequired => on_off(state.input.required),
            Self::InputDisabled => on_off(state.input.disabled),
            Self::InputRadius => format!("{}px", state.input.border_radius()),
            Self::InputIcon => on_off(state.input.add_icon),
            Self::InputTextColor => state.input.text_color.to_hex(),
            Self::InputBg => state.input.bg_color.to_hex(),
            Self::InputBorderColor => state.input.border_color.to_hex(),
            Self::InputFocusColor => state.input.focus_color.to_hex(),
        }
    }

    /// Adjusts the field by one step in either direction.
    ///
    /// Numbers clamp at their range bounds, enums and colors cycle, and
    /// booleans toggle regardless of direction.
    pub fn adjust(self, state: &mut AppState, delta: i32) {
        let forward = delta >= 0;
        match self {
            Self::GridRows => {
                let value = step(state.grid.rows(), delta, 1);
                state.grid.set_rows(value);
            }
            Self::GridCols => {
                let value = step(state.grid.cols(), delta, 1);
                state.grid.set_cols(value);
            }
            Self::GridGap => {
                let value = step(state.grid.gap(), delta, 2);
                state.grid.set_gap(value);
            }
            Self::GridCellMin => {
                let value = step(state.grid.cell_min(), delta, 10);
                state.grid.set_cell_min(value);
            }
            Self::GridLayout => {
                state.grid.layout_mode = cycle(state.grid.layout_mode, forward, |m| m.next(), |m| m.prev());
            }
            Self::GridAlign => {
                state.grid.align_items = cycle(state.grid.align_items, forward, |a| a.next(), |a| a.prev());
            }
            Self::GridJustify => {
                state.grid.justify_items = cycle(state.grid.justify_items, forward, |a| a.next(), |a| a.prev());
            }
            Self::GridColor => {
                state.grid.cell_color = cycle_color(state.grid.cell_color, forward);
            }
            Self::GridLabels => state.grid.show_cell_text = !state.grid.show_cell_text,

            Self::ButtonText => {}
            Self::ButtonWidth => {
                let value = step(state.button.width(), delta, 10);
                state.button.set_width(value);
            }
            Self::ButtonHeight => {
                let value = step(state.button.height(), delta, 4);
                state.button.set_height(value);
            }
            Self::ButtonRadius => {
                let value = step(state.button.border_radius(), delta, 1);
                state.button.set_border_radius(value);
            }
            Self::ButtonBorderWidth => {
                let value = step(state.button.border_width(), delta, 1);
                state.button.set_border_width(value);
            }
            Self::ButtonBg => {
                state.button.bg_color = cycle_color(state.button.bg_color, forward);
            }
            Self::ButtonBorderColor => {
                state.button.border_color = cycle_color(state.button.border_color, forward);
            }
            Self::ButtonTextColor => {
                state.button.text_color = cycle_color(state.button.text_color, forward);
            }
            Self::ButtonHover => {
                state.button.hover_effect =
                    cycle(state.button.hover_effect, forward, |e| e.next(), |e| e.prev());
            }
            Self::ButtonIcon => {
                // Cycling past the icon list toggles the icon off
                if state.button.add_icon {
                    state.button.icon = cycle(state.button.icon, forward, |i| i.next(), |i| i.prev());
                } else {
                    state.button.add_icon = true;
                }
            }
            Self::ButtonShadow => state.button.add_shadow = !state.button.add_shadow,
            Self::ButtonPulse => {
                state.button.pulse_animation = !state.button.pulse_animation;
            }

            Self::InputKind => {
                state.input.kind = cycle(state.input.kind, forward, |k| k.next(), |k| k.prev());
            }
            Self::InputLabel | Self::InputPlaceholder => {}
            Self::InputRequired => state.input.required = !state.input.required,
            Self::InputDisabled => state.input.disabled = !state.input.disabled,
            Self::InputRadius => {
                let value = step(state.input.border_radius(), delta, 1);
                state.input.set_border_radius(value);
            }
            Self::InputIcon => state.input.add_icon = !state.input.add_icon,
            Self::InputTextColor => {
                state.input.text_color = cycle_color(state.input.text_color, forward);
            }
            Self::InputBg => {
                state.input.bg_color = cycle_color(state.input.bg_color, forward);
            }
            Self::InputBorderColor => {
                state.input.border_color = cycle_color(state.input.border_color, forward);
            }
            Self::InputFocusColor => {
                state.input.focus_color = cycle_color(state.input.focus_color, forward);
            }
        }
    }

    /// Seed text for the inline editor.
    #[must_use]
    pub fn edit_seed(self, state: &AppState) -> String {
        match self {
            Self::ButtonText => state.button.raw_text().to_string(),
            Self::InputLabel => state.input.raw_label().to_string(),
            Self::InputPlaceholder => state.input.placeholder().to_string(),
            _ => String::new(),
        }
    }

    /// Commits the inline editor's buffer back into the configuration.
    pub fn commit_text(self, state: &mut AppState, text: String) {
        match self {
            Self::ButtonText => state.button.set_text(text),
            Self::InputLabel => state.input.set_label(text),
            Self::InputPlaceholder => state.input.set_placeholder(text),
            _ => {}
        }
    }
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

/// Applies a signed step to an unsigned value without wrapping; the
/// setter clamps the result to its range.
fn step(current: u32, delta: i32, size: u32) -> u32 {
    if delta >= 0 {
        current.saturating_add(size)
    } else {
        current.saturating_sub(size)
    }
}

fn cycle<T>(value: T, forward: bool, next: impl Fn(T) -> T, prev: impl Fn(T) -> T) -> T {
    if forward {
        next(value)
    } else {
        prev(value)
    }
}

fn cycle_color(current: HexColor, forward: bool) -> HexColor {
    if forward {
        palette_next(current)
    } else {
        palette_prev(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Tool;
    use crate::models::LayoutMode;

    #[test]
    fn test_fields_cover_each_tool() {
        assert_eq!(fields_for(Tool::Grid).len(), 9);
        assert_eq!(fields_for(Tool::Button).len(), 12);
        assert_eq!(fields_for(Tool::Input).len(), 11);
    }

    #[test]
    fn test_adjust_clamps_at_bounds() {
        let mut state = AppState::headless();
        for _ in 0..20 {
            Field::GridRows.adjust(&mut state, 1);
        }
        assert_eq!(state.grid.rows(), 12);
        for _ in 0..20 {
            Field::GridRows.adjust(&mut state, -1);
        }
        assert_eq!(state.grid.rows(), 1);
    }

    #[test]
    fn test_adjust_cycles_enums() {
        let mut state = AppState::headless();
        assert_eq!(state.grid.layout_mode, LayoutMode::Flexible);
        Field::GridLayout.adjust(&mut state, 1);
        Field::GridLayout.adjust(&mut state, -1);
        assert_eq!(state.grid.layout_mode, LayoutMode::Flexible);
    }

    #[test]
    fn test_icon_field_turns_icon_on_first() {
        let mut state = AppState::headless();
        assert!(!state.button.add_icon);
        Field::ButtonIcon.adjust(&mut state, 1);
        assert!(state.button.add_icon);
        let before = state.button.icon;
        Field::ButtonIcon.adjust(&mut state, 1);
        assert_ne!(state.button.icon, before);
    }

    #[test]
    fn test_text_commit_round_trip() {
        let mut state = AppState::headless();
        Field::ButtonText.commit_text(&mut state, "Buy Now".to_string());
        assert_eq!(state.button.text(), "Buy Now");
        assert_eq!(Field::ButtonText.edit_seed(&state), "Buy Now");
    }
}
