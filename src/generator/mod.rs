//! Template engine mapping a configuration snapshot to preview style
//! directives and generated source text.
//!
//! Everything in this module is pure and synchronous: the same
//! configuration always produces byte-identical output, and no reachable
//! configuration state can make a recompute fail.

pub mod button;
pub mod code;
pub mod grid;
pub mod input;
pub mod metrics;

pub use code::{CodeBlock, CodeLine, CodeToken, TokenKind};
pub use metrics::CodeMetrics;

use crate::models::{ButtonConfig, GridConfig, InputConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three design generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// CSS grid layout generator
    #[default]
    Grid,
    /// Button design generator
    Button,
    /// Form input design generator
    Input,
}

impl Tool {
    /// All tools, in UI order.
    pub const ALL: [Self; 3] = [Self::Grid, Self::Button, Self::Input];

    /// Lowercase tool name used by the CLI and config file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Button => "button",
            Self::Input => "input",
        }
    }

    /// Human-readable title for the TUI.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Grid => "CSS Grid",
            Self::Button => "Button",
            Self::Input => "Form Input",
        }
    }

    /// Parses a tool name, falling back to `Grid`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "button" => Self::Button,
            "input" => Self::Input,
            _ => Self::Grid,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A selectable generated-source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFormat {
    /// Structure-only markup
    Html,
    /// Style-only rules
    Css,
    /// Script stub
    Js,
    /// Style rules embedded above the markup
    #[default]
    Combined,
}

impl CodeFormat {
    /// Lowercase format name used by the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
            Self::Combined => "combined",
        }
    }

    /// Tab label for the code pane.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JS",
            Self::Combined => "Combined",
        }
    }

    /// Parses a format name, falling back to `Combined`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "html" => Self::Html,
            "css" => Self::Css,
            "js" => Self::Js,
            _ => Self::Combined,
        }
    }

    /// The code pane tabs offered for a tool.
    #[must_use]
    pub const fn tabs_for(tool: Tool) -> &'static [Self] {
        match tool {
            Tool::Grid => &[Self::Html, Self::Css, Self::Combined],
            Tool::Button => &[Self::Html, Self::Css, Self::Js],
            Tool::Input => &[Self::Html, Self::Css, Self::Combined],
        }
    }
}

/// A single style property/value pair applied to the preview artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// CSS property name
    pub property: String,
    /// CSS value text
    pub value: String,
}

/// An ordered style-property to value mapping, recomputed in full on
/// every configuration change.
///
/// Ordering is insertion order, which keeps recompute output stable and
/// comparable across cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectiveSet {
    directives: Vec<Directive>,
}

impl DirectiveSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Sets a property, replacing any previous value for it.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        if let Some(existing) = self
            .directives
            .iter_mut()
            .find(|d| d.property == property)
        {
            existing.value = value;
        } else {
            self.directives.push(Directive { property, value });
        }
    }

    /// Looks up a property's value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.directives
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Iterates the directives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    /// Number of directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// Generated sources for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSet {
    /// Structure-only markup
    pub html: CodeBlock,
    /// Style-only rules
    pub css: CodeBlock,
    /// Script stub, emitted only by the button tool
    pub js: Option<CodeBlock>,
}

impl SourceSet {
    /// Builds the combined document: style rules wrapped in `<style>`,
    /// a blank separator, then the markup.
    #[must_use]
    pub fn combined(&self) -> CodeBlock {
        let mut block = CodeBlock::new();
        block.push(CodeLine::new().with(TokenKind::Tag, "<style>"));
        block.extend(&self.css);
        block.push(CodeLine::new().with(TokenKind::Tag, "</style>"));
        block.push_blank();
        block.extend(&self.html);
        block
    }

    /// Returns the block for a format selector.
    ///
    /// Requesting `Js` from a tool that emits no script yields the
    /// standard "no JavaScript required" stub rather than an error.
    #[must_use]
    pub fn block(&self, format: CodeFormat) -> CodeBlock {
        match format {
            CodeFormat::Html => self.html.clone(),
            CodeFormat::Css => self.css.clone(),
            CodeFormat::Js => self.js.clone().unwrap_or_else(js_stub),
            CodeFormat::Combined => self.combined(),
        }
    }

    /// Plain text for a format selector.
    #[must_use]
    pub fn text(&self, format: CodeFormat) -> String {
        self.block(format).text()
    }

    /// Metrics over the combined document.
    #[must_use]
    pub fn metrics(&self) -> CodeMetrics {
        CodeMetrics::measure(&self.combined().text())
    }
}

/// The standard script stub shared by tools that need no JavaScript.
#[must_use]
pub fn js_stub() -> CodeBlock {
    let mut block = CodeBlock::new();
    block.push(code::lines::comment("No JavaScript required for basic functionality"));
    block.push(code::lines::comment("For hover effects, include the CSS above"));
    block
}

/// Everything derived from one configuration snapshot.
///
/// Lifetime is one render cycle; the next recompute replaces the whole
/// value rather than patching it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOutput {
    /// Style directives for the preview container
    pub container: DirectiveSet,
    /// Style directives shared by every preview unit
    pub unit: DirectiveSet,
    /// Number of preview units (grid cells, or 1 for button/input)
    pub unit_count: usize,
    /// Per-unit coordinate/label text; empty when labels are disabled
    pub unit_labels: Vec<String>,
    /// Generated sources
    pub sources: SourceSet,
}

/// A configuration snapshot for any of the three tools.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolConfig {
    /// Grid generator configuration
    Grid(GridConfig),
    /// Button generator configuration
    Button(ButtonConfig),
    /// Input generator configuration
    Input(InputConfig),
}

impl ToolConfig {
    /// Which tool this configuration belongs to.
    #[must_use]
    pub const fn tool(&self) -> Tool {
        match self {
            Self::Grid(_) => Tool::Grid,
            Self::Button(_) => Tool::Button,
            Self::Input(_) => Tool::Input,
        }
    }
}

/// Recomputes directives, sources, and unit labels from a configuration
/// snapshot.
///
/// This is the single entry point the UI controller calls after every
/// mutation. It is deterministic and cannot fail.
#[must_use]
pub fn recompute(config: &ToolConfig) -> RenderOutput {
    match config {
        ToolConfig::Grid(grid) => grid::generate(grid),
        ToolConfig::Button(button) => button::generate(button),
        ToolConfig::Input(input) => input::generate(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridConfig;

    #[test]
    fn test_directive_set_replaces_on_set() {
        let mut set = DirectiveSet::new();
        set.set("gap", "10px");
        set.set("gap", "20px");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("gap"), Some("20px"));
    }

    #[test]
    fn test_directive_set_preserves_insertion_order() {
        let mut set = DirectiveSet::new();
        set.set("display", "grid");
        set.set("gap", "10px");
        set.set("align-items", "stretch");
        let props: Vec<_> = set.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, ["display", "gap", "align-items"]);
    }

    #[test]
    fn test_tool_from_name_fallback() {
        assert_eq!(Tool::from_name("button"), Tool::Button);
        assert_eq!(Tool::from_name("???"), Tool::Grid);
    }

    #[test]
    fn test_format_from_name_fallback() {
        assert_eq!(CodeFormat::from_name("css"), CodeFormat::Css);
        assert_eq!(CodeFormat::from_name("xml"), CodeFormat::Combined);
    }

    #[test]
    fn test_js_falls_back_to_stub_for_toolless_sources() {
        let config = ToolConfig::Grid(GridConfig::default());
        let output = recompute(&config);
        let js = output.sources.text(CodeFormat::Js);
        assert!(js.contains("No JavaScript required"));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let config = ToolConfig::Grid(GridConfig::default());
        let first = recompute(&config);
        let second = recompute(&config);
        assert_eq!(first, second);
    }
}
