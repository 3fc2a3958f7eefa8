//! Source and directive generation for the CSS grid tool.

use super::code::{lines, CodeBlock, CodeLine, TokenKind};
use super::{DirectiveSet, RenderOutput, SourceSet};
use crate::models::{GridConfig, LayoutMode};

/// Alpha used for the translucent cell fill derived from the cell color.
pub const CELL_FILL_ALPHA: f32 = 0.2;

/// Builds the `grid-template` track descriptor for the configured layout
/// mode.
///
/// Any mode outside the four recognized values uses the `Flexible`
/// formula; that fallback is part of the contract, not an error path.
#[must_use]
pub fn layout_descriptor(config: &GridConfig) -> String {
    let rows = config.rows();
    let cols = config.cols();
    let min = config.cell_min();

    match config.layout_mode {
        LayoutMode::Static => {
            format!("repeat({rows}, {min}px) / repeat({cols}, {min}px)")
        }
        LayoutMode::Flexible => format!("repeat({rows}, 1fr) / repeat({cols}, 1fr)"),
        LayoutMode::Auto => format!("repeat(auto-fill, minmax({min}px, 1fr))"),
        LayoutMode::Mixed => format!(
            "repeat({rows}, minmax({min}px, 1fr)) / repeat({cols}, minmax({min}px, 1fr))"
        ),
    }
}

/// 1-based "row-col" labels for every cell in row-major order.
#[must_use]
pub fn unit_labels(rows: u32, cols: u32) -> Vec<String> {
    (0..rows * cols)
        .map(|i| format!("{}-{}", i / cols + 1, i % cols + 1))
        .collect()
}

/// Recomputes the full render output for a grid configuration.
#[must_use]
pub fn generate(config: &GridConfig) -> RenderOutput {
    let labels = unit_labels(config.rows(), config.cols());

    let mut container = DirectiveSet::new();
    container.set("display", "grid");
    container.set("grid-template", layout_descriptor(config));
    container.set("gap", format!("{}px", config.gap()));
    container.set("align-items", config.align_items.name());
    container.set("justify-items", config.justify_items.name());

    let mut unit = DirectiveSet::new();
    unit.set("min-height", format!("{}px", config.cell_min()));
    unit.set(
        "background-color",
        config.cell_color.to_rgba(CELL_FILL_ALPHA),
    );
    unit.set("border", format!("1px solid {}", config.cell_color));

    RenderOutput {
        container,
        unit,
        unit_count: config.cell_count() as usize,
        unit_labels: if config.show_cell_text {
            labels.clone()
        } else {
            Vec::new()
        },
        sources: SourceSet {
            html: html_block(&labels),
            css: css_block(config),
            js: None,
        },
    }
}

/// Structure-only markup: one item element per cell, in row-major order.
fn html_block(labels: &[String]) -> CodeBlock {
    let mut block = CodeBlock::new();
    block.push(
        CodeLine::new()
            .with(TokenKind::Tag, "<div")
            .with(TokenKind::Punct, " ")
            .with(TokenKind::Attr, "class")
            .with(TokenKind::Punct, "=\"")
            .with(TokenKind::Value, "grid-container")
            .with(TokenKind::Punct, "\">"),
    );
    for label in labels {
        block.push(
            CodeLine::new()
                .with(TokenKind::Punct, "  ")
                .with(TokenKind::Tag, "<div")
                .with(TokenKind::Punct, " ")
                .with(TokenKind::Attr, "class")
                .with(TokenKind::Punct, "=\"")
                .with(TokenKind::Value, "grid-item")
                .with(TokenKind::Punct, "\">")
                .with(TokenKind::Text, format!("Item {label}"))
                .with(TokenKind::Tag, "</div>"),
        );
    }
    block.push(CodeLine::new().with(TokenKind::Tag, "</div>"));
    block
}

/// Style-only rules: the container rule followed by the item rule.
fn css_block(config: &GridConfig) -> CodeBlock {
    let mut block = CodeBlock::new();

    block.push(lines::rule_open(".grid-container"));
    block.push(lines::declaration("  ", "display", "grid"));
    block.push(lines::declaration(
        "  ",
        "grid-template",
        &layout_descriptor(config),
    ));
    block.push(lines::declaration(
        "  ",
        "gap",
        &format!("{}px", config.gap()),
    ));
    block.push(lines::declaration(
        "  ",
        "align-items",
        config.align_items.name(),
    ));
    block.push(lines::declaration(
        "  ",
        "justify-items",
        config.justify_items.name(),
    ));
    block.push(lines::rule_close());
    block.push_blank();

    block.push(lines::rule_open(".grid-item"));
    block.push(lines::declaration(
        "  ",
        "min-height",
        &format!("{}px", config.cell_min()),
    ));
    block.push(lines::declaration(
        "  ",
        "background-color",
        &config.cell_color.to_rgba(CELL_FILL_ALPHA),
    ));
    block.push(lines::declaration(
        "  ",
        "border",
        &format!("1px solid {}", config.cell_color),
    ));
    block.push(lines::declaration("  ", "display", "flex"));
    block.push(lines::declaration("  ", "align-items", "center"));
    block.push(lines::declaration("  ", "justify-content", "center"));
    block.push(lines::rule_close());

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemAlignment;

    fn config_3x2() -> GridConfig {
        let mut config = GridConfig::default();
        config.set_rows(3);
        config.set_cols(2);
        config.set_gap(10);
        config.set_cell_min(80);
        config
    }

    #[test]
    fn test_descriptor_static() {
        let mut config = config_3x2();
        config.layout_mode = LayoutMode::Static;
        assert_eq!(
            layout_descriptor(&config),
            "repeat(3, 80px) / repeat(2, 80px)"
        );
    }

    #[test]
    fn test_descriptor_flexible() {
        let config = config_3x2();
        assert_eq!(layout_descriptor(&config), "repeat(3, 1fr) / repeat(2, 1fr)");
    }

    #[test]
    fn test_descriptor_auto() {
        let mut config = config_3x2();
        config.layout_mode = LayoutMode::Auto;
        assert_eq!(
            layout_descriptor(&config),
            "repeat(auto-fill, minmax(80px, 1fr))"
        );
    }

    #[test]
    fn test_descriptor_mixed() {
        let mut config = config_3x2();
        config.layout_mode = LayoutMode::Mixed;
        assert_eq!(
            layout_descriptor(&config),
            "repeat(3, minmax(80px, 1fr)) / repeat(2, minmax(80px, 1fr))"
        );
    }

    #[test]
    fn test_unit_labels_row_major() {
        let labels = unit_labels(3, 2);
        assert_eq!(labels, ["1-1", "1-2", "2-1", "2-2", "3-1", "3-2"]);
    }

    #[test]
    fn test_unit_count_for_all_dimensions() {
        for rows in 1..=12u32 {
            for cols in 1..=12u32 {
                let labels = unit_labels(rows, cols);
                assert_eq!(labels.len(), (rows * cols) as usize);
                // Spot-check the coordinate formula for the last cell
                assert_eq!(labels[labels.len() - 1], format!("{rows}-{cols}"));
            }
        }
    }

    #[test]
    fn test_generate_html_shape() {
        let output = generate(&config_3x2());
        let html = output.sources.html.text();
        assert!(html.starts_with("<div class=\"grid-container\">"));
        assert!(html.ends_with("</div>"));
        assert_eq!(html.matches("grid-item").count(), 6);
        assert!(html.contains("  <div class=\"grid-item\">Item 1-1</div>"));
        assert!(html.contains("  <div class=\"grid-item\">Item 3-2</div>"));
    }

    #[test]
    fn test_generate_css_shape() {
        let mut config = config_3x2();
        config.align_items = ItemAlignment::Center;
        let output = generate(&config);
        let css = output.sources.css.text();
        assert!(css.contains(".grid-container {"));
        assert!(css.contains("  grid-template: repeat(3, 1fr) / repeat(2, 1fr);"));
        assert!(css.contains("  gap: 10px;"));
        assert!(css.contains("  align-items: center;"));
        assert!(css.contains(".grid-item {"));
        assert!(css.contains("  background-color: rgba(67, 97, 238, 0.2);"));
        assert!(css.contains("  border: 1px solid #4361ee;"));
        assert!(css.ends_with("}"));
    }

    #[test]
    fn test_generate_combined_embeds_both() {
        let output = generate(&config_3x2());
        let combined = output.sources.combined().text();
        assert!(combined.starts_with("<style>\n"));
        assert!(combined.contains("</style>\n\n<div class=\"grid-container\">"));
    }

    #[test]
    fn test_labels_suppressed_but_units_kept() {
        let mut config = config_3x2();
        config.show_cell_text = false;
        let output = generate(&config);
        assert_eq!(output.unit_count, 6);
        assert!(output.unit_labels.is_empty());
        // The markup always carries its item labels regardless
        assert!(output.sources.html.text().contains("Item 1-1"));
    }

    #[test]
    fn test_container_directives() {
        let output = generate(&config_3x2());
        assert_eq!(output.container.get("display"), Some("grid"));
        assert_eq!(output.container.get("gap"), Some("10px"));
        assert_eq!(
            output.container.get("grid-template"),
            Some("repeat(3, 1fr) / repeat(2, 1fr)")
        );
        assert_eq!(output.unit.get("min-height"), Some("80px"));
    }
}
