//! Source and directive generation for the form input tool.
//!
//! The input tool has the widest markup surface of the three: grouped
//! controls (radio/checkbox) render three sample options, selects render
//! a placeholder option plus the samples, and text-like inputs can be
//! wrapped with a leading icon. Every kind switch carries an explicit
//! default branch, so an unrecognized kind renders as a text input.

use super::code::{lines, CodeBlock, CodeLine, TokenKind};
use super::{DirectiveSet, RenderOutput, SourceSet};
use crate::models::{InputConfig, InputKind, SAMPLE_OPTIONS};

/// Alpha used for the translucent focus ring derived from the focus color.
pub const FOCUS_RING_ALPHA: f32 = 0.2;

/// Recomputes the full render output for an input configuration.
#[must_use]
pub fn generate(config: &InputConfig) -> RenderOutput {
    let mut container = DirectiveSet::new();
    container.set("border-radius", format!("{}px", config.border_radius()));
    container.set("color", config.text_color.to_hex());
    container.set("background-color", config.bg_color.to_hex());
    container.set("border-color", config.border_color.to_hex());
    container.set("accent-color", config.focus_color.to_hex());

    RenderOutput {
        container,
        unit: DirectiveSet::new(),
        unit_count: 1,
        unit_labels: vec![config.label().to_string()],
        sources: SourceSet {
            html: html_block(config),
            css: css_block(config),
            js: None,
        },
    }
}

/// Markup for the configured control kind.
fn html_block(config: &InputConfig) -> CodeBlock {
    match config.kind {
        InputKind::Radio => group_html(config, "radio"),
        InputKind::Checkbox => group_html(config, "checkbox"),
        InputKind::Select => select_html(config),
        InputKind::Textarea => textarea_html(config),
        _ => text_input_html(config),
    }
}

/// Shared wrapper: `<div class="form-group">` around a label and a body.
fn form_group(label_line: CodeLine, body: CodeBlock) -> CodeBlock {
    let mut block = CodeBlock::new();
    block.push(open_tag("<div", &[("class", "form-group")]));
    block.push(label_line);
    block.extend(&body);
    block.push(CodeLine::new().with(TokenKind::Tag, "</div>"));
    block
}

/// Radio or checkbox group with the three sample options.
fn group_html(config: &InputConfig, kind: &str) -> CodeBlock {
    let mut body = CodeBlock::new();
    body.push(indent(
        1,
        open_tag("<div", &[("class", &format!("{kind}-group"))]),
    ));
    for (i, option) in SAMPLE_OPTIONS.iter().enumerate() {
        let id = format!("{kind}-{i}");
        body.push(indent(
            2,
            open_tag("<div", &[("class", &format!("{kind}-option"))]),
        ));
        let mut attrs: Vec<(&str, &str)> = vec![("type", kind), ("id", &id)];
        if kind == "radio" {
            attrs.push(("name", "radio-group"));
        }
        body.push(indent(3, input_tag(&attrs, config)));
        body.push(indent(
            3,
            CodeLine::new()
                .with(TokenKind::Tag, "<label")
                .with(TokenKind::Punct, " ")
                .with(TokenKind::Attr, "for")
                .with(TokenKind::Punct, "=\"")
                .with(TokenKind::Value, id.clone())
                .with(TokenKind::Punct, "\">")
                .with(TokenKind::Text, option.label)
                .with(TokenKind::Tag, "</label>"),
        ));
        body.push(indent(2, CodeLine::new().with(TokenKind::Tag, "</div>")));
    }
    body.push(indent(1, CodeLine::new().with(TokenKind::Tag, "</div>")));

    form_group(indent(1, plain_label(config)), body)
}

/// Select with a disabled placeholder option plus the sample options.
fn select_html(config: &InputConfig) -> CodeBlock {
    let mut body = CodeBlock::new();
    let mut open = tag_with_attrs(
        "<select",
        &[("id", "custom-select"), ("class", "custom-input")],
    );
    open = append_state_attrs(open, config);
    open = open.with(TokenKind::Punct, ">");
    body.push(indent(1, open));
    body.push(indent(
        2,
        CodeLine::new()
            .with(TokenKind::Tag, "<option")
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "value")
            .with(TokenKind::Punct, "=\"\" ")
            .with(TokenKind::Attr, "disabled")
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "selected")
            .with(TokenKind::Punct, ">")
            .with(TokenKind::Text, config.select_placeholder())
            .with(TokenKind::Tag, "</option>"),
    ));
    for option in SAMPLE_OPTIONS {
        body.push(indent(
            2,
            CodeLine::new()
                .with(TokenKind::Tag, "<option")
                .with(TokenKind::Punct, " ")
                .with(TokenKind::Attr, "value")
                .with(TokenKind::Punct, "=\"")
                .with(TokenKind::Value, option.value)
                .with(TokenKind::Punct, "\">")
                .with(TokenKind::Text, option.label)
                .with(TokenKind::Tag, "</option>"),
        ));
    }
    body.push(indent(1, CodeLine::new().with(TokenKind::Tag, "</select>")));

    form_group(indent(1, for_label(config, "custom-select")), body)
}

/// Textarea with placeholder and state attributes.
fn textarea_html(config: &InputConfig) -> CodeBlock {
    let mut line = tag_with_attrs(
        "<textarea",
        &[
            ("id", "custom-textarea"),
            ("class", "custom-input"),
            ("placeholder", config.placeholder()),
        ],
    );
    line = append_state_attrs(line, config);
    line = line
        .with(TokenKind::Punct, ">")
        .with(TokenKind::Tag, "</textarea>");

    let mut body = CodeBlock::new();
    body.push(indent(1, line));
    form_group(indent(1, for_label(config, "custom-textarea")), body)
}

/// Plain `<input>`, optionally wrapped with a leading icon.
fn text_input_html(config: &InputConfig) -> CodeBlock {
    let input_line = input_tag(
        &[
            ("type", config.kind.name()),
            ("id", "custom-input"),
            ("class", "custom-input"),
            ("placeholder", config.placeholder()),
        ],
        config,
    );

    let mut body = CodeBlock::new();
    if config.add_icon {
        body.push(indent(1, open_tag("<div", &[("class", "input-icon")])));
        body.push(indent(
            2,
            CodeLine::new()
                .with(TokenKind::Tag, "<i")
                .with(TokenKind::Punct, " ")
                .with(TokenKind::Attr, "class")
                .with(TokenKind::Punct, "=\"")
                .with(TokenKind::Value, format!("fas {}", config.kind.icon_class()))
                .with(TokenKind::Punct, "\">")
                .with(TokenKind::Tag, "</i>"),
        ));
        body.push(indent(2, input_line));
        body.push(indent(1, CodeLine::new().with(TokenKind::Tag, "</div>")));
    } else {
        body.push(indent(1, input_line));
    }
    form_group(indent(1, for_label(config, "custom-input")), body)
}

/// Style rules for the configured control kind.
fn css_block(config: &InputConfig) -> CodeBlock {
    match config.kind {
        InputKind::Radio => group_css(config, "radio"),
        InputKind::Checkbox => group_css(config, "checkbox"),
        InputKind::Select => {
            let mut extra = CodeBlock::new();
            extra.push(lines::declaration("    ", "appearance", "none"));
            custom_input_css(config, &extra, &CodeBlock::new())
        }
        InputKind::Textarea => {
            let mut extra = CodeBlock::new();
            extra.push(lines::declaration("    ", "min-height", "100px"));
            extra.push(lines::declaration("    ", "resize", "vertical"));
            custom_input_css(config, &extra, &CodeBlock::new())
        }
        _ => {
            let icon_css = if config.add_icon {
                icon_rules()
            } else {
                CodeBlock::new()
            };
            custom_input_css(config, &CodeBlock::new(), &icon_css)
        }
    }
}

/// Rules for radio/checkbox groups; the accent color follows the focus
/// color.
fn group_css(config: &InputConfig, kind: &str) -> CodeBlock {
    let mut block = CodeBlock::new();

    block.push(lines::rule_open(&format!(".{kind}-group")));
    block.push(lines::declaration("    ", "display", "flex"));
    block.push(lines::declaration("    ", "gap", "15px"));
    block.push(lines::declaration("    ", "margin-top", "8px"));
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(&format!(".{kind}-option")));
    block.push(lines::declaration("    ", "display", "flex"));
    block.push(lines::declaration("    ", "align-items", "center"));
    block.push(lines::declaration("    ", "gap", "5px"));
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(&format!(
        ".{kind}-option input[type=\"{kind}\"]"
    )));
    block.push(lines::declaration(
        "    ",
        "accent-color",
        &config.focus_color.to_hex(),
    ));
    block.push(lines::declaration("    ", "width", "16px"));
    block.push(lines::declaration("    ", "height", "16px"));
    block.push(lines::rule_close());

    block
}

/// The shared `.custom-input` rule and focus rule, with kind-specific
/// extras spliced into the base rule and optional trailing rules.
fn custom_input_css(config: &InputConfig, extra: &CodeBlock, trailing: &CodeBlock) -> CodeBlock {
    let mut block = CodeBlock::new();

    block.push(lines::rule_open(".custom-input"));
    block.push(lines::declaration("    ", "width", "100%"));
    block.push(lines::declaration("    ", "padding", "12px 15px"));
    block.push(lines::declaration(
        "    ",
        "border",
        &format!("1px solid {}", config.border_color),
    ));
    block.push(lines::declaration(
        "    ",
        "border-radius",
        &format!("{}px", config.border_radius()),
    ));
    block.push(lines::declaration("    ", "font-size", "1rem"));
    block.push(lines::declaration(
        "    ",
        "color",
        &config.text_color.to_hex(),
    ));
    block.push(lines::declaration(
        "    ",
        "background-color",
        &config.bg_color.to_hex(),
    ));
    block.push(lines::declaration("    ", "transition", "all 0.3s ease"));
    block.extend(extra);
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(".custom-input:focus"));
    block.push(lines::declaration("    ", "outline", "none"));
    block.push(lines::declaration(
        "    ",
        "border-color",
        &config.focus_color.to_hex(),
    ));
    block.push(lines::declaration(
        "    ",
        "box-shadow",
        &format!("0 0 0 2px {}", config.focus_color.to_rgba(FOCUS_RING_ALPHA)),
    ));
    block.push(lines::rule_close());

    if trailing.line_count() > 0 {
        block.push_blank();
        block.extend(trailing);
    }

    block
}

/// Rules positioning the leading icon inside a text-like input.
fn icon_rules() -> CodeBlock {
    let mut block = CodeBlock::new();

    block.push(lines::rule_open(".input-icon"));
    block.push(lines::declaration("    ", "position", "relative"));
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(".input-icon i"));
    block.push(lines::declaration("    ", "position", "absolute"));
    block.push(lines::declaration("    ", "left", "10px"));
    block.push(lines::declaration("    ", "top", "50%"));
    block.push(lines::declaration("    ", "transform", "translateY(-50%)"));
    block.push(lines::declaration("    ", "color", "#6c757d"));
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(".input-icon .custom-input"));
    block.push(lines::declaration("    ", "padding-left", "35px"));
    block.push(lines::rule_close());

    block
}

/// `<label>Label</label>` without a `for` attribute (grouped kinds).
fn plain_label(config: &InputConfig) -> CodeLine {
    CodeLine::new()
        .with(TokenKind::Tag, "<label")
        .with(TokenKind::Punct, ">")
        .with(TokenKind::Text, config.label())
        .with(TokenKind::Tag, "</label>")
}

/// `<label for="id">Label</label>`.
fn for_label(config: &InputConfig, target: &str) -> CodeLine {
    CodeLine::new()
        .with(TokenKind::Tag, "<label")
        .with(TokenKind::Punct, " ")
        .with(TokenKind::Attr, "for")
        .with(TokenKind::Punct, "=\"")
        .with(TokenKind::Value, target)
        .with(TokenKind::Punct, "\">")
        .with(TokenKind::Text, config.label())
        .with(TokenKind::Tag, "</label>")
}

/// Opens a tag with the given attributes, without the terminating `>`.
fn tag_with_attrs(tag: &str, attrs: &[(&str, &str)]) -> CodeLine {
    let mut line = CodeLine::new().with(TokenKind::Tag, tag);
    for (name, value) in attrs {
        line = line
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, *name)
            .with(TokenKind::Punct, "=\"")
            .with(TokenKind::Value, *value)
            .with(TokenKind::Punct, "\"");
    }
    line
}

/// Opens and terminates a tag with the given attributes.
fn open_tag(tag: &str, attrs: &[(&str, &str)]) -> CodeLine {
    tag_with_attrs(tag, attrs).with(TokenKind::Punct, ">")
}

/// `<input ...>` with the configured required/disabled state appended.
fn input_tag(attrs: &[(&str, &str)], config: &InputConfig) -> CodeLine {
    let line = append_state_attrs(tag_with_attrs("<input", attrs), config);
    line.with(TokenKind::Punct, ">")
}

/// Appends bare `required`/`disabled` attributes when configured.
fn append_state_attrs(mut line: CodeLine, config: &InputConfig) -> CodeLine {
    if config.required {
        line = line
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "required");
    }
    if config.disabled {
        line = line
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "disabled");
    }
    line
}

/// Prefixes a line with `level` levels of 4-space indentation.
fn indent(level: usize, line: CodeLine) -> CodeLine {
    let mut out = CodeLine::new().with(TokenKind::Punct, "    ".repeat(level));
    for token in line.tokens() {
        out.push(token.kind, token.text.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_html() {
        let config = InputConfig::default();
        let html = generate(&config).sources.html.text();
        assert!(html.starts_with("<div class=\"form-group\">"));
        assert!(html.contains("<label for=\"custom-input\">Username</label>"));
        assert!(html.contains(
            "<input type=\"text\" id=\"custom-input\" class=\"custom-input\" \
             placeholder=\"Enter your username\" required>"
        ));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_disabled_attribute_emitted() {
        let mut config = InputConfig::default();
        config.disabled = true;
        config.required = false;
        let html = generate(&config).sources.html.text();
        assert!(html.contains(" disabled>"));
        assert!(!html.contains(" required"));
    }

    #[test]
    fn test_radio_group_has_three_options() {
        let mut config = InputConfig::default();
        config.kind = InputKind::Radio;
        let html = generate(&config).sources.html.text();
        assert_eq!(html.matches("radio-option").count(), 3);
        assert!(html.contains("name=\"radio-group\""));
        assert!(html.contains("<label for=\"radio-0\">Option 1</label>"));
        // Grouped labels carry no for attribute on the group label
        assert!(html.contains("<label>Username</label>"));
    }

    #[test]
    fn test_checkbox_group_css_accent() {
        let mut config = InputConfig::default();
        config.kind = InputKind::Checkbox;
        let css = generate(&config).sources.css.text();
        assert!(css.contains(".checkbox-option input[type=\"checkbox\"] {"));
        assert!(css.contains("    accent-color: #4361ee;"));
        assert!(!css.contains(".custom-input"));
    }

    #[test]
    fn test_select_placeholder_option() {
        let mut config = InputConfig::default();
        config.kind = InputKind::Select;
        config.set_placeholder("");
        let html = generate(&config).sources.html.text();
        assert!(html.contains(">Select an option</option>"));
        assert_eq!(html.matches("<option value=\"option").count(), 3);
        let css = generate(&config).sources.css.text();
        assert!(css.contains("    appearance: none;"));
    }

    #[test]
    fn test_textarea_extras() {
        let mut config = InputConfig::default();
        config.kind = InputKind::Textarea;
        let output = generate(&config);
        assert!(output.sources.html.text().contains("</textarea>"));
        let css = output.sources.css.text();
        assert!(css.contains("    min-height: 100px;"));
        assert!(css.contains("    resize: vertical;"));
    }

    #[test]
    fn test_icon_wrapping_for_password() {
        let mut config = InputConfig::default();
        config.kind = InputKind::Password;
        config.add_icon = true;
        let output = generate(&config);
        let html = output.sources.html.text();
        assert!(html.contains("input-icon"));
        assert!(html.contains("fas fa-lock"));
        let css = output.sources.css.text();
        assert!(css.contains(".input-icon .custom-input {"));
        assert!(css.contains("    padding-left: 35px;"));
    }

    #[test]
    fn test_focus_rule_uses_translucent_ring() {
        let config = InputConfig::default();
        let css = generate(&config).sources.css.text();
        assert!(css.contains(".custom-input:focus {"));
        assert!(css.contains("    box-shadow: 0 0 0 2px rgba(67, 97, 238, 0.2);"));
    }

    #[test]
    fn test_directives_reflect_colors() {
        let config = InputConfig::default();
        let output = generate(&config);
        assert_eq!(output.container.get("border-color"), Some("#dddddd"));
        assert_eq!(output.container.get("accent-color"), Some("#4361ee"));
        assert_eq!(output.unit_labels, ["Username"]);
    }
}
