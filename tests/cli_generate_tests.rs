//! End-to-end tests for `designforge generate` commands.

use std::process::Command;

/// Path to the designforge binary
fn designforge_bin() -> String {
    std::env::var("CARGO_BIN_EXE_designforge")
        .unwrap_or_else(|_| "target/release/designforge".to_string())
}

#[test]
fn test_generate_grid_default_is_combined() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<style>"));
    assert!(stdout.contains(".grid-container {"));
    assert!(stdout.contains("</style>\n\n<div class=\"grid-container\">"));
    // 3x3 default grid
    assert_eq!(stdout.matches("grid-item").count(), 10); // 9 items + 1 css rule
}

#[test]
fn test_generate_grid_html_format() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid", "--rows", "2", "--cols", "2", "--format", "html"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<div class=\"grid-container\">"));
    assert!(stdout.contains("  <div class=\"grid-item\">Item 1-1</div>"));
    assert!(stdout.contains("  <div class=\"grid-item\">Item 2-2</div>"));
    assert!(!stdout.contains("<style>"));
}

#[test]
fn test_generate_grid_clamps_out_of_range_flags() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid", "--rows", "99", "--gap", "999", "--format", "css"])
        .output()
        .expect("Failed to execute command");

    // Forgiving input: out-of-range values clamp instead of failing
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repeat(12, 1fr)"));
    assert!(stdout.contains("gap: 50px;"));
}

#[test]
fn test_generate_grid_unknown_layout_falls_back() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid", "--layout", "diagonal", "--format", "css"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Unknown mode uses the flexible formula
    assert!(stdout.contains("repeat(3, 1fr) / repeat(3, 1fr)"));
}

#[test]
fn test_generate_grid_multibyte_color_falls_back() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid", "--color", "aébcd", "--format", "css"])
        .output()
        .expect("Failed to execute command");

    // Malformed colors (including non-ASCII bytes) keep the default
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rgba(67, 97, 238, 0.2)"));
    assert!(stdout.contains("border: 1px solid #4361ee;"));
}

#[test]
fn test_generate_button_css() {
    let output = Command::new(designforge_bin())
        .args([
            "generate", "button", "--text", "Buy Now", "--hover", "grow", "--shadow",
            "--format", "css",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".custom-btn {"));
    assert!(stdout.contains("    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);"));
    assert!(stdout.contains(".custom-btn:hover {"));
    assert!(stdout.contains("    transform: scale(1.05);"));
}

#[test]
fn test_generate_button_js_stub() {
    let output = Command::new(designforge_bin())
        .args(["generate", "button", "--format", "js"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("// No JavaScript required"));
}

#[test]
fn test_generate_input_radio_group() {
    let output = Command::new(designforge_bin())
        .args(["generate", "input", "--kind", "radio", "--label", "Plan", "--format", "html"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Plan"));
    assert_eq!(stdout.matches("type=\"radio\"").count(), 3);
    assert!(stdout.contains("Option 1"));
    assert!(stdout.contains("Option 3"));
}

#[test]
fn test_generate_json_summary() {
    let output = Command::new(designforge_bin())
        .args(["generate", "grid", "--format", "css", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(summary["tool"], "grid");
    assert_eq!(summary["format"], "css");
    assert_eq!(summary["filename"], "grid-layout.css");
    assert_eq!(summary["media_type"], "text/css");
    assert!(summary["bytes"].as_u64().unwrap() > 0);
    assert!(summary["lines"].as_u64().unwrap() > 0);
}

#[test]
fn test_generate_is_deterministic() {
    let run = || {
        Command::new(designforge_bin())
            .args(["generate", "input", "--kind", "select"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run());
}
