//! Library-level scenario tests covering the full recompute pipeline.

use designforge::generator::{recompute, CodeFormat, Tool, ToolConfig};
use designforge::models::{
    ButtonConfig, GridConfig, HexColor, HoverEffect, InputConfig, InputKind, LayoutMode,
};
use designforge::preview::PreviewTree;

#[test]
fn test_grid_scenario_three_by_two() {
    let mut config = GridConfig::default();
    config.set_rows(3);
    config.set_cols(2);

    let output = recompute(&ToolConfig::Grid(config));

    assert_eq!(output.unit_count, 6);
    assert_eq!(
        output.unit_labels,
        ["1-1", "1-2", "2-1", "2-2", "3-1", "3-2"]
    );
    assert_eq!(
        output.container.get("grid-template"),
        Some("repeat(3, 1fr) / repeat(2, 1fr)")
    );

    let html = output.sources.text(CodeFormat::Html);
    assert_eq!(html.matches("<div class=\"grid-item\">").count(), 6);
}

#[test]
fn test_grid_static_mode_uses_pixel_tracks() {
    let mut config = GridConfig::default();
    config.layout_mode = LayoutMode::Static;
    config.set_cell_min(120);

    let output = recompute(&ToolConfig::Grid(config));
    assert_eq!(
        output.container.get("grid-template"),
        Some("repeat(3, 120px) / repeat(3, 120px)")
    );
}

#[test]
fn test_combined_format_structure() {
    let output = recompute(&ToolConfig::Grid(GridConfig::default()));
    let combined = output.sources.text(CodeFormat::Combined);

    let style_open = combined.find("<style>").unwrap();
    let style_close = combined.find("</style>").unwrap();
    let container = combined.find("<div class=\"grid-container\">").unwrap();
    assert!(style_open < style_close);
    assert!(style_close < container);
    // Blank separator between the style block and the markup
    assert!(combined.contains("</style>\n\n<div"));
}

#[test]
fn test_button_scenario_custom_styling() {
    let mut config = ButtonConfig::default();
    config.set_text("Submit");
    config.set_width(200);
    config.set_height(60);
    config.bg_color = HexColor::new(0x22, 0x88, 0x44);
    config.hover_effect = HoverEffect::Shrink;
    config.pulse_animation = true;

    let output = recompute(&ToolConfig::Button(config));

    assert_eq!(output.unit_labels, ["Submit"]);
    // font-size = min(16, height / 3)
    assert_eq!(output.container.get("font-size"), Some("16px"));

    let css = output.sources.text(CodeFormat::Css);
    assert!(css.contains("    background: #228844;"));
    assert!(css.contains("    transform: scale(0.95);"));
    assert!(css.contains("@keyframes pulse {"));
}

#[test]
fn test_button_font_size_tracks_small_heights() {
    let mut config = ButtonConfig::default();
    config.set_height(30);
    let output = recompute(&ToolConfig::Button(config));
    assert_eq!(output.container.get("font-size"), Some("10px"));
}

#[test]
fn test_input_scenario_password_with_icon() {
    let mut config = InputConfig::default();
    config.kind = InputKind::Password;
    config.set_label("Password");
    config.set_placeholder("Enter password");
    config.add_icon = true;

    let output = recompute(&ToolConfig::Input(config));

    assert_eq!(output.unit_labels, ["Password"]);
    let html = output.sources.text(CodeFormat::Html);
    assert!(html.contains("type=\"password\""));
    assert!(html.contains("fa-lock"));
    assert!(html.contains("required"));

    let css = output.sources.text(CodeFormat::Css);
    assert!(css.contains(".custom-input:focus {"));
    assert!(css.contains("rgba(67, 97, 238, 0.2)"));
}

#[test]
fn test_input_select_has_placeholder_option() {
    let mut config = InputConfig::default();
    config.kind = InputKind::Select;
    config.set_placeholder(String::new());

    let html = recompute(&ToolConfig::Input(config))
        .sources
        .text(CodeFormat::Html);
    assert!(html.contains("<select"));
    assert!(html.contains("Select an option"));
    assert_eq!(html.matches("<option").count(), 4); // placeholder + 3 samples
}

#[test]
fn test_preview_tree_follows_recompute() {
    let mut config = GridConfig::default();
    config.set_rows(2);
    config.set_cols(5);

    let output = recompute(&ToolConfig::Grid(config));
    let tree = PreviewTree::from_output(&output);

    assert_eq!(tree.unit_count(), 10);
    assert_eq!(tree.units[9].label.as_deref(), Some("2-5"));
    assert_eq!(tree.container.get("display"), Some("grid"));
}

#[test]
fn test_metrics_cover_combined_document() {
    let output = recompute(&ToolConfig::Grid(GridConfig::default()));
    let metrics = output.sources.metrics();
    let combined = output.sources.text(CodeFormat::Combined);

    assert_eq!(metrics.bytes, combined.len());
    assert_eq!(metrics.lines, combined.split('\n').count());
}

#[test]
fn test_tool_identity_round_trip() {
    for tool in Tool::ALL {
        assert_eq!(Tool::from_name(tool.name()), tool);
    }
}

#[test]
fn test_recompute_never_changes_between_cycles() {
    let configs = [
        ToolConfig::Grid(GridConfig::default()),
        ToolConfig::Button(ButtonConfig::default()),
        ToolConfig::Input(InputConfig::default()),
    ];
    for config in &configs {
        assert_eq!(recompute(config), recompute(config));
    }
}
