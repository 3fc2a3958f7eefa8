//! Source and directive generation for the button tool.

use super::code::{lines, CodeBlock, CodeLine, TokenKind};
use super::{js_stub, DirectiveSet, RenderOutput, SourceSet};
use crate::models::{ButtonConfig, HoverEffect};

/// Shadow emitted when the shadow flag is set.
const BOX_SHADOW: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";

/// Recomputes the full render output for a button configuration.
#[must_use]
pub fn generate(config: &ButtonConfig) -> RenderOutput {
    let mut container = DirectiveSet::new();
    container.set("width", format!("{}px", config.width()));
    container.set("height", format!("{}px", config.height()));
    container.set("background-color", config.bg_color.to_hex());
    container.set("color", config.text_color.to_hex());
    container.set(
        "border",
        format!("{}px solid {}", config.border_width(), config.border_color),
    );
    container.set("border-radius", format!("{}px", config.border_radius()));
    container.set("font-size", format!("{}px", config.font_size()));
    if config.add_shadow {
        container.set("box-shadow", BOX_SHADOW);
    }
    if config.pulse_animation {
        container.set("animation", "pulse 1.5s infinite");
    }

    RenderOutput {
        container,
        unit: DirectiveSet::new(),
        unit_count: 1,
        unit_labels: vec![config.text().to_string()],
        sources: SourceSet {
            html: html_block(config),
            css: css_block(config),
            js: Some(js_stub()),
        },
    }
}

/// Markup: a single button element, optionally with a trailing icon.
fn html_block(config: &ButtonConfig) -> CodeBlock {
    let mut line = CodeLine::new()
        .with(TokenKind::Tag, "<button")
        .with(TokenKind::Punct, " ")
        .with(TokenKind::Attr, "class")
        .with(TokenKind::Punct, "=\"")
        .with(TokenKind::Value, "custom-btn")
        .with(TokenKind::Punct, "\">")
        .with(TokenKind::Text, config.text());
    if config.add_icon {
        line = line
            .with(TokenKind::Text, " ")
            .with(TokenKind::Tag, "<i")
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "class")
            .with(TokenKind::Punct, "=\"")
            .with(TokenKind::Value, format!("fas {}", config.icon.css_class()))
            .with(TokenKind::Punct, "\">")
            .with(TokenKind::Tag, "</i>");
    }
    line = line.with(TokenKind::Tag, "</button>");

    let mut block = CodeBlock::new();
    block.push(line);
    block
}

/// Style rules: the base rule, the hover rule, and the optional pulse
/// keyframes.
fn css_block(config: &ButtonConfig) -> CodeBlock {
    let mut block = CodeBlock::new();

    block.push(lines::rule_open(".custom-btn"));
    block.push(lines::declaration(
        "    ",
        "background",
        &config.bg_color.to_hex(),
    ));
    block.push(lines::declaration(
        "    ",
        "color",
        &config.text_color.to_hex(),
    ));
    block.push(lines::declaration(
        "    ",
        "border",
        &format!("{}px solid {}", config.border_width(), config.border_color),
    ));
    block.push(lines::declaration(
        "    ",
        "border-radius",
        &format!("{}px", config.border_radius()),
    ));
    block.push(lines::declaration(
        "    ",
        "width",
        &format!("{}px", config.width()),
    ));
    block.push(lines::declaration(
        "    ",
        "height",
        &format!("{}px", config.height()),
    ));
    block.push(lines::declaration("    ", "cursor", "pointer"));
    block.push(lines::declaration(
        "    ",
        "font-size",
        &format!("{}px", config.font_size()),
    ));
    block.push(lines::declaration("    ", "transition", "all 0.3s ease"));
    if config.add_shadow {
        block.push(lines::declaration("    ", "box-shadow", BOX_SHADOW));
    }
    if config.pulse_animation {
        block.push(lines::declaration("    ", "animation", "pulse 1.5s infinite"));
    }
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(".custom-btn:hover"));
    block.push(hover_declaration(config));
    block.push(lines::rule_close());

    if config.pulse_animation {
        block.push_blank();
        block.push(lines::rule_open("@keyframes pulse"));
        block.push(keyframe("    ", "0%", "scale(1)"));
        block.push(keyframe("    ", "50%", "scale(1.05)"));
        block.push(keyframe("    ", "100%", "scale(1)"));
        block.push(lines::rule_close());
    }

    block
}

/// The single declaration inside the `:hover` rule.
///
/// Every effect has an explicit branch; anything else keeps the
/// configured background, the same rule the `None` effect produces.
/// `Darken` and `Lighten` go through the color stubs, so today they also
/// emit the configured background unchanged.
fn hover_declaration(config: &ButtonConfig) -> CodeLine {
    match config.hover_effect {
        HoverEffect::Darken => lines::declaration(
            "    ",
            "background",
            &config.bg_color.darken(20).to_hex(),
        ),
        HoverEffect::Lighten => lines::declaration(
            "    ",
            "background",
            &config.bg_color.lighten(20).to_hex(),
        ),
        HoverEffect::Grow => lines::declaration("    ", "transform", "scale(1.05)"),
        HoverEffect::Shrink => lines::declaration("    ", "transform", "scale(0.95)"),
        HoverEffect::Rotate => lines::declaration("    ", "transform", "rotate(5deg)"),
        HoverEffect::None => {
            lines::declaration("    ", "background", &config.bg_color.to_hex())
        }
    }
}

/// `<indent>stop { transform: value; }`
fn keyframe(indent: &str, stop: &str, transform: &str) -> CodeLine {
    CodeLine::new()
        .with(TokenKind::Punct, indent)
        .with(TokenKind::Selector, stop)
        .with(TokenKind::Punct, " { ")
        .with(TokenKind::Property, "transform")
        .with(TokenKind::Punct, ": ")
        .with(TokenKind::Value, transform)
        .with(TokenKind::Punct, "; }")
}
