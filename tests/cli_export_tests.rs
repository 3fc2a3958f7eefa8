//! End-to-end tests for `designforge export` commands.

use std::process::Command;

/// Path to the designforge binary
fn designforge_bin() -> String {
    std::env::var("CARGO_BIN_EXE_designforge")
        .unwrap_or_else(|_| "target/release/designforge".to_string())
}

#[test]
fn test_export_grid_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.html");

    let output = Command::new(designforge_bin())
        .args(["export", "grid", "-o"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Exported grid to:"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<style>"));
    assert!(written.contains("<div class=\"grid-container\">"));
}

#[test]
fn test_export_button_css_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.css");

    let output = Command::new(designforge_bin())
        .args(["export", "button", "--width", "200", "--format", "css", "-o"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(".custom-btn {"));
    assert!(written.contains("    width: 200px;"));
    assert!(!written.contains("<button"));
}

#[test]
fn test_export_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("input.html");

    let output = Command::new(designforge_bin())
        .args(["export", "input", "--kind", "textarea", "--format", "html", "-o"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<textarea"));
}

#[test]
fn test_export_default_path_uses_config_dir() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(designforge_bin())
        .env("DESIGNFORGE_CONFIG_DIR", dir.path())
        .args(["export", "grid", "--format", "css"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Default filename in the configured export directory
    let expected = dir.path().join("exports").join("grid-layout.css");
    assert!(expected.exists(), "missing {}", expected.display());
}

#[test]
fn test_export_to_unwritable_path_fails_with_io_code() {
    let output = Command::new(designforge_bin())
        .args(["export", "grid", "-o", "/proc/designforge-no-such-dir/out.html"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}
