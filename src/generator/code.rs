//! Structured representation of generated source text.
//!
//! Generators never concatenate display markup directly. Each source is
//! built as a list of token-tagged lines; separate formatters render the
//! same lines either as plain text (for export, clipboard, and metrics)
//! or as styled spans in the code pane. This keeps highlighting immune
//! to generated values that happen to contain markup metacharacters.

use std::fmt;

/// Syntactic role of a token, used only for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// HTML tag name including angle brackets
    Tag,
    /// HTML attribute name
    Attr,
    /// Attribute or property value
    Value,
    /// CSS selector
    Selector,
    /// CSS property name
    Property,
    /// Plain text content
    Text,
    /// Structural punctuation (braces, colons, equals, quotes)
    Punct,
    /// Comment text
    Comment,
}

/// A run of characters with a single syntactic role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeToken {
    /// Display role
    pub kind: TokenKind,
    /// Literal text
    pub text: String,
}

impl CodeToken {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One line of generated source, as an ordered token list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeLine {
    tokens: Vec<CodeToken>,
}

impl CodeLine {
    /// Creates an empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Creates an empty (blank) line; alias that reads better at call sites.
    #[must_use]
    pub const fn blank() -> Self {
        Self::new()
    }

    /// Appends a token and returns the line, builder-style.
    #[must_use]
    pub fn with(mut self, kind: TokenKind, text: impl Into<String>) -> Self {
        self.tokens.push(CodeToken::new(kind, text));
        self
    }

    /// Appends a token in place.
    pub fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(CodeToken::new(kind, text));
    }

    /// The tokens making up this line.
    #[must_use]
    pub fn tokens(&self) -> &[CodeToken] {
        &self.tokens
    }

    /// Renders the line as plain text.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// A complete generated source: an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    lines: Vec<CodeLine>,
}

impl CodeBlock {
    /// Creates an empty block.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends a line.
    pub fn push(&mut self, line: CodeLine) {
        self.lines.push(line);
    }

    /// Appends a blank line.
    pub fn push_blank(&mut self) {
        self.lines.push(CodeLine::blank());
    }

    /// Appends every line of another block.
    pub fn extend(&mut self, other: &Self) {
        self.lines.extend(other.lines.iter().cloned());
    }

    /// The lines of this block.
    #[must_use]
    pub fn lines(&self) -> &[CodeLine] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Renders the block as plain newline-joined text, with no trailing
    /// newline.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(CodeLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Convenience helpers for the line shapes the generators emit over and
/// over.
pub mod lines {
    use super::{CodeLine, TokenKind};

    /// `selector {`
    #[must_use]
    pub fn rule_open(selector: &str) -> CodeLine {
        CodeLine::new()
            .with(TokenKind::Selector, selector)
            .with(TokenKind::Punct, " {")
    }

    /// `}`
    #[must_use]
    pub fn rule_close() -> CodeLine {
        CodeLine::new().with(TokenKind::Punct, "}")
    }

    /// `<indent>property: value;`
    #[must_use]
    pub fn declaration(indent: &str, property: &str, value: &str) -> CodeLine {
        CodeLine::new()
            .with(TokenKind::Punct, indent)
            .with(TokenKind::Property, property)
            .with(TokenKind::Punct, ": ")
            .with(TokenKind::Value, value)
            .with(TokenKind::Punct, ";")
    }

    /// `// text`
    #[must_use]
    pub fn comment(text: &str) -> CodeLine {
        CodeLine::new().with(TokenKind::Comment, format!("// {text}"))
    }
}
