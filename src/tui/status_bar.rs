//! Status bar widget for status messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::generator::Tool;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status line and the contextual key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.as_str(), Style::default().fg(theme.error)),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            )));
        } else if let Some(buffer) = &state.editing {
            lines.push(Line::from(vec![
                Span::styled("Editing: ", Style::default().fg(theme.accent)),
                Span::styled(buffer.as_str(), Style::default().fg(theme.text)),
                Span::styled("_", Style::default().fg(theme.accent)),
                Span::styled(
                    "  (Enter: apply, Esc: cancel)",
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        } else {
            lines.push(Self::hints_line(state, theme));
        }

        lines.push(Self::keys_line(theme));

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(widget, area);
    }

    /// Hints tailored to the active tool.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let tool_hint = match state.tool {
            Tool::Grid => "p: preset",
            Tool::Button => "Enter: edit text",
            Tool::Input => "Enter: edit label/placeholder",
        };
        Line::from(vec![
            Span::styled(
                format!("{} | ", state.tool.title()),
                Style::default().fg(theme.primary),
            ),
            Span::styled(tool_hint.to_string(), Style::default().fg(theme.text_muted)),
        ])
    }

    /// Global key reference line.
    fn keys_line(theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            "1/2/3: tool | ↑↓: field | ←→: adjust | Tab: code view | c: copy | s: save | r: reset | q: quit",
            Style::default().fg(theme.text_muted),
        ))
    }
}
