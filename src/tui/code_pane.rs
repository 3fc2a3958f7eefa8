//! Code pane: tabbed view of the generated sources with syntax styling.

use super::{AppState, Theme};
use crate::generator::{CodeBlock, CodeFormat, TokenKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Code pane widget
pub struct CodePane;

impl CodePane {
    /// Render the tab strip, the styled source, and the metrics footer.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Generated Code ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Min(1),    // Source
                Constraint::Length(1), // Metrics
            ])
            .split(inner);

        let tabs = CodeFormat::tabs_for(state.tool);
        let titles: Vec<Line> = tabs.iter().map(|t| Line::from(t.label())).collect();
        let tab_widget = Tabs::new(titles)
            .select(state.code_tab.min(tabs.len() - 1))
            .style(Style::default().fg(theme.text_secondary))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tab_widget, chunks[0]);

        let format = state.current_format();
        let source = state.output.sources.block(format);
        let visible = styled_lines(&source, theme, chunks[1].height as usize);
        f.render_widget(Paragraph::new(visible), chunks[1]);

        let metrics = state.output.sources.metrics();
        let footer = Paragraph::new(metrics.summary())
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(footer, chunks[2]);
    }
}

/// Converts a code block into styled ratatui lines, truncated to fit.
fn styled_lines<'a>(block: &'a CodeBlock, theme: &Theme, max_lines: usize) -> Vec<Line<'a>> {
    block
        .lines()
        .iter()
        .take(max_lines)
        .map(|line| {
            Line::from(
                line.tokens()
                    .iter()
                    .map(|token| {
                        Span::styled(
                            token.text.as_str(),
                            Style::default().fg(token_color(token.kind, theme)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Maps a token kind to a theme color.
const fn token_color(kind: TokenKind, theme: &Theme) -> Color {
    match kind {
        TokenKind::Tag | TokenKind::Selector => theme.primary,
        TokenKind::Attr | TokenKind::Property => theme.accent,
        TokenKind::Value => theme.success,
        TokenKind::Text => theme.text,
        TokenKind::Punct => theme.text_secondary,
        TokenKind::Comment => theme.text_muted,
    }
}
