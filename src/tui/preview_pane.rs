//! Preview pane: draws the retained preview tree for the active tool.

use super::{AppState, Theme};
use crate::generator::{DirectiveSet, Tool};
use crate::models::HexColor;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Preview pane widget
pub struct PreviewPane;

impl PreviewPane {
    /// Render the preview for the current tool.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Preview ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width < 4 || inner.height < 3 {
            return;
        }

        match state.tool {
            Tool::Grid => Self::render_grid(f, inner, state, theme),
            Tool::Button => Self::render_button(f, inner, state, theme),
            Tool::Input => Self::render_input(f, inner, state, theme),
        }
    }

    /// Draws the grid cells in a rows-by-cols arrangement.
    fn render_grid(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let rows = state.grid.rows().max(1);
        let cols = state.grid.cols().max(1);
        let cell_w = area.width / cols as u16;
        let cell_h = area.height / rows as u16;
        if cell_w < 2 || cell_h < 1 {
            return;
        }

        let fill = state
            .preview
            .units
            .first()
            .and_then(|unit| border_color(&unit.directives))
            .unwrap_or(theme.highlight_bg);

        for (index, unit) in state.preview.units.iter().enumerate() {
            let row = index as u32 / cols;
            let col = index as u32 % cols;
            let cell = Rect {
                x: area.x + (col as u16) * cell_w,
                y: area.y + (row as u16) * cell_h,
                width: cell_w.saturating_sub(1).max(1),
                height: cell_h.saturating_sub(if cell_h > 1 { 1 } else { 0 }).max(1),
            };

            let text = unit.label.clone().unwrap_or_default();
            let cell_widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().bg(fill).fg(contrast_text(fill)));
            f.render_widget(cell_widget, cell);
        }
    }

    /// Draws the button centered in the pane, sized to its proportions.
    fn render_button(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let bg = container_color(&state.preview.container, "background-color")
            .unwrap_or(theme.accent);
        let fg = container_color(&state.preview.container, "color").unwrap_or(theme.text);

        // Terminal cells are roughly twice as tall as wide
        let max_w = u32::from(area.width.saturating_sub(2)).max(6);
        let max_h = u32::from(area.height.saturating_sub(2)).max(1);
        let width = (state.button.width() / 8).clamp(6, max_w) as u16;
        let height = (state.button.height() / 16).clamp(1, max_h) as u16;

        let button = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height + 2)) / 2,
            width,
            height: height + 2,
        };

        let label = state
            .preview
            .units
            .first()
            .and_then(|unit| unit.label.clone())
            .unwrap_or_default();

        let widget = Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(bg).fg(fg));
        f.render_widget(widget, button);
    }

    /// Draws the labeled field with its placeholder text.
    fn render_input(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let border = container_color(&state.preview.container, "border-color")
            .unwrap_or(theme.text_muted);
        let text = container_color(&state.preview.container, "color").unwrap_or(theme.text);

        let width = area.width.saturating_sub(4).clamp(10, 40);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(4)) / 2;

        let label = state
            .preview
            .units
            .first()
            .and_then(|unit| unit.label.clone())
            .unwrap_or_default();
        let suffix = if state.input.required { " *" } else { "" };

        let label_area = Rect {
            x,
            y,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(format!("{label}{suffix}")).style(Style::default().fg(text)),
            label_area,
        );

        let field_area = Rect {
            x,
            y: y + 1,
            width,
            height: 3,
        };
        let placeholder = match state.input.kind.name() {
            "select" => state.input.select_placeholder().to_string(),
            _ => state.input.placeholder().to_string(),
        };
        let style = if state.input.disabled {
            Style::default().fg(theme.text_muted)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let field = Paragraph::new(placeholder)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(field, field_area);
    }
}

/// Pulls the hex color out of a `border: 1px solid #hex` directive.
fn border_color(directives: &DirectiveSet) -> Option<Color> {
    let value = directives.get("border")?;
    let hex = value.split_whitespace().last()?;
    hex.starts_with('#')
        .then(|| HexColor::from_hex_or(hex, FALLBACK).to_ratatui_color())
}

/// Reads a container directive that holds a plain hex color value.
fn container_color(directives: &DirectiveSet, property: &str) -> Option<Color> {
    let value = directives.get(property)?;
    value
        .starts_with('#')
        .then(|| HexColor::from_hex_or(value, FALLBACK).to_ratatui_color())
}

/// Mid-gray stand-in for a directive value that fails to parse.
const FALLBACK: HexColor = HexColor::new(128, 128, 128);

/// Black or white, whichever reads better on the fill color.
fn contrast_text(fill: Color) -> Color {
    match fill {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{recompute, ToolConfig};
    use crate::models::GridConfig;
    use crate::preview::PreviewTree;

    #[test]
    fn test_border_color_parses_unit_directive() {
        let output = recompute(&ToolConfig::Grid(GridConfig::default()));
        let tree = PreviewTree::from_output(&output);
        let color = border_color(&tree.units[0].directives);
        assert_eq!(color, Some(Color::Rgb(0x43, 0x61, 0xee)));
    }

    #[test]
    fn test_container_color_ignores_non_hex_values() {
        let output = recompute(&ToolConfig::Grid(GridConfig::default()));
        // "display: grid" is not a color
        assert_eq!(container_color(&output.container, "display"), None);
    }
}
