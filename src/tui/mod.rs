//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod code_pane;
pub mod controls;
pub mod preview_pane;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::export;
use crate::generator::{recompute, CodeFormat, RenderOutput, Tool, ToolConfig};
use crate::models::{ButtonConfig, GridConfig, InputConfig, GRID_PRESETS};
use crate::preview::PreviewTree;

pub use code_pane::CodePane;
pub use controls::{fields_for, Field};
pub use preview_pane::PreviewPane;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// How long a status toast stays visible.
const STATUS_TOAST: Duration = Duration::from_millis(2500);

/// Application state for the TUI.
pub struct AppState {
    /// Active tool
    pub tool: Tool,
    /// Grid tool configuration
    pub grid: GridConfig,
    /// Button tool configuration
    pub button: ButtonConfig,
    /// Input tool configuration
    pub input: InputConfig,
    /// Latest render output for the active tool
    pub output: RenderOutput,
    /// Retained preview derived from the render output
    pub preview: PreviewTree,
    /// Selected tab index into `CodeFormat::tabs_for`
    pub code_tab: usize,
    /// Selected control index into `fields_for`
    pub selected_field: usize,
    /// Inline text editor buffer, if a text field is being edited
    pub editing: Option<String>,
    /// Transient status message
    pub status_message: String,
    /// When the status message was set
    status_set_at: Option<Instant>,
    /// Error message shown until the next action
    pub error_message: Option<String>,
    /// Active color theme
    pub theme: Theme,
    /// Loaded application configuration
    pub config: Config,
    /// Set when the user quits
    pub should_quit: bool,
    /// Next grid preset to apply
    preset_index: usize,
}

impl AppState {
    /// Creates the initial state from the loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let tool = config.ui.default_tool;
        let theme = Theme::from_mode(config.ui.theme);
        let mut state = Self {
            tool,
            grid: GridConfig::default(),
            button: ButtonConfig::default(),
            input: InputConfig::default(),
            output: RenderOutput::default(),
            preview: PreviewTree::new(),
            code_tab: 0,
            selected_field: 0,
            editing: None,
            status_message: String::new(),
            status_set_at: None,
            error_message: None,
            theme,
            config,
            should_quit: false,
            preset_index: 0,
        };
        state.recompute();
        state
    }

    /// State with default configuration, used by unit tests.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(Config::default())
    }

    /// The configuration snapshot for the active tool.
    #[must_use]
    pub fn tool_config(&self) -> ToolConfig {
        match self.tool {
            Tool::Grid => ToolConfig::Grid(self.grid.clone()),
            Tool::Button => ToolConfig::Button(self.button.clone()),
            Tool::Input => ToolConfig::Input(self.input.clone()),
        }
    }

    /// Re-runs the generator and rebuilds the preview tree.
    pub fn recompute(&mut self) {
        self.output = recompute(&self.tool_config());
        self.preview.rebuild(&self.output);
    }

    /// Switches the active tool, keeping each tool's configuration.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            self.tool = tool;
            self.code_tab = 0;
            self.selected_field = 0;
            self.editing = None;
            self.recompute();
        }
    }

    /// The source format shown by the selected code tab.
    #[must_use]
    pub fn current_format(&self) -> CodeFormat {
        let tabs = CodeFormat::tabs_for(self.tool);
        tabs[self.code_tab.min(tabs.len() - 1)]
    }

    /// The currently selected control field.
    #[must_use]
    pub fn selected(&self) -> Field {
        let fields = fields_for(self.tool);
        fields[self.selected_field.min(fields.len() - 1)]
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_set_at = Some(Instant::now());
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clears a status toast once it has been visible long enough.
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_TOAST {
                self.status_message.clear();
                self.status_set_at = None;
            }
        }
    }

    /// Copies the visible source to the system clipboard.
    pub fn copy_code(&mut self) {
        let format = self.current_format();
        let payload = export::payload(self.tool, format, &self.output.sources);
        match export::copy_to_clipboard(&payload) {
            Ok(()) => self.set_status(format!("Copied {} to clipboard", format.label())),
            Err(e) => self.set_error(format!("Clipboard unavailable: {e}")),
        }
    }

    /// Writes the visible source to the configured export directory.
    pub fn export_file(&mut self) {
        let format = self.current_format();
        let payload = export::payload(self.tool, format, &self.output.sources);
        let path = self.config.export.output_dir.join(&payload.filename);
        match export::write_payload(&path, &payload) {
            Ok(()) => self.set_status(format!("✓ Exported to {}", path.display())),
            Err(e) => self.set_error(format!("Export failed: {e}")),
        }
    }

    /// Resets the active tool's configuration to its defaults.
    pub fn reset_current(&mut self) {
        match self.tool {
            Tool::Grid => self.grid.reset(),
            Tool::Button => self.button.reset(),
            Tool::Input => self.input.reset(),
        }
        self.recompute();
        self.set_status("Reset to defaults");
    }

    /// Applies the next grid preset in rotation.
    pub fn apply_next_preset(&mut self) {
        let preset = GRID_PRESETS[self.preset_index % GRID_PRESETS.len()];
        self.preset_index = (self.preset_index + 1) % GRID_PRESETS.len();
        self.grid.apply_preset(preset);
        self.recompute();
        self.set_status(format!("Preset: {}", preset.name));
    }
}

/// Set up the terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.expire_status();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles one key event. Returns true when the user quits.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Inline text editing captures every key until commit or cancel
    if let Some(buffer) = &mut state.editing {
        match key.code {
            KeyCode::Enter => {
                let text = state.editing.take().unwrap_or_default();
                state.selected().commit_text(state, text);
                state.recompute();
            }
            KeyCode::Esc => {
                state.editing = None;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => {
                buffer.push(c);
            }
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('1') => state.select_tool(Tool::Grid),
        KeyCode::Char('2') => state.select_tool(Tool::Button),
        KeyCode::Char('3') => state.select_tool(Tool::Input),
        KeyCode::Tab => {
            let tabs = CodeFormat::tabs_for(state.tool);
            state.code_tab = (state.code_tab + 1) % tabs.len();
        }
        KeyCode::BackTab => {
            let tabs = CodeFormat::tabs_for(state.tool);
            state.code_tab = (state.code_tab + tabs.len() - 1) % tabs.len();
        }
        KeyCode::Up => {
            let count = fields_for(state.tool).len();
            state.selected_field = (state.selected_field + count - 1) % count;
        }
        KeyCode::Down => {
            let count = fields_for(state.tool).len();
            state.selected_field = (state.selected_field + 1) % count;
        }
        KeyCode::Left => {
            state.selected().adjust(state, -1);
            state.recompute();
        }
        KeyCode::Right => {
            state.selected().adjust(state, 1);
            state.recompute();
        }
        KeyCode::Enter => {
            let field = state.selected();
            if field.is_text() {
                state.editing = Some(field.edit_seed(state));
            } else {
                field.adjust(state, 1);
                state.recompute();
            }
        }
        KeyCode::Char('c') => state.copy_code(),
        KeyCode::Char('s') => state.export_file(),
        KeyCode::Char('r') => state.reset_current(),
        KeyCode::Char('p') => {
            if state.tool == Tool::Grid {
                state.apply_next_preset();
            }
        }
        _ => {}
    }

    Ok(false)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill the screen with the theme background first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),     // Controls
            Constraint::Percentage(40), // Preview
            Constraint::Min(30),        // Code
        ])
        .split(chunks[1]);

    render_controls(f, main[0], state);
    PreviewPane::render(f, main[1], state, &state.theme);
    CodePane::render(f, main[2], state, &state.theme);

    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Title bar with the tool selector.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        format!(" {} ", crate::constants::APP_NAME),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, tool) in Tool::ALL.iter().enumerate() {
        let style = if *tool == state.tool {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", i + 1, tool.title()),
            style,
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Control panel listing the active tool's fields.
fn render_controls(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Controls ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = fields_for(state.tool);
    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(i, field)| {
            let selected = i == state.selected_field;
            let marker = if selected { "› " } else { "  " };
            let value = if selected && state.editing.is_some() {
                format!("{}_", state.editing.as_deref().unwrap_or(""))
            } else {
                field.value_text(state)
            };
            let label_style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<14}", field.label()), label_style),
                Span::styled(value, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_state_matches_default_tool() {
        let state = AppState::headless();
        assert_eq!(state.tool, Tool::Grid);
        assert_eq!(state.output.unit_count, 9);
        assert_eq!(state.preview.unit_count(), 9);
    }

    #[test]
    fn test_tool_switch_resets_selection_and_recomputes() {
        let mut state = AppState::headless();
        state.selected_field = 5;
        handle_key_event(&mut state, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(state.tool, Tool::Button);
        assert_eq!(state.selected_field, 0);
        assert_eq!(state.output.unit_count, 1);
    }

    #[test]
    fn test_adjust_keys_update_output() {
        let mut state = AppState::headless();
        // First field is rows
        handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        assert_eq!(state.grid.rows(), 4);
        assert_eq!(state.output.unit_count, 12);
    }

    #[test]
    fn test_tab_cycles_within_tool_tabs() {
        let mut state = AppState::headless();
        assert_eq!(state.current_format(), CodeFormat::Html);
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.current_format(), CodeFormat::Css);
        handle_key_event(&mut state, key(KeyCode::BackTab)).unwrap();
        assert_eq!(state.current_format(), CodeFormat::Html);
    }

    #[test]
    fn test_text_editing_flow() {
        let mut state = AppState::headless();
        state.select_tool(Tool::Button);
        // First button field is the label text
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.editing.is_some());
        handle_key_event(&mut state, key(KeyCode::Char('!'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.editing.is_none());
        assert_eq!(state.button.text(), "Click Me!");
        assert_eq!(state.output.unit_labels, ["Click Me!"]);
    }

    #[test]
    fn test_escape_cancels_editing() {
        let mut state = AppState::headless();
        state.select_tool(Tool::Button);
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        handle_key_event(&mut state, key(KeyCode::Backspace)).unwrap();
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.editing.is_none());
        assert_eq!(state.button.text(), "Click Me");
    }

    #[test]
    fn test_preset_key_cycles_grid_presets() {
        let mut state = AppState::headless();
        handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();
        assert_eq!((state.grid.rows(), state.grid.cols()), (2, 2));
        handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();
        assert_eq!((state.grid.rows(), state.grid.cols()), (3, 3));
    }

    #[test]
    fn test_quit_key() {
        let mut state = AppState::headless();
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
    }
}
