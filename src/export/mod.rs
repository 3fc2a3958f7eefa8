//! Export of generated sources to files and the system clipboard.
//!
//! The adapter maps a tool and format selection onto a concrete payload
//! (suggested filename, media type, source text) and handles the two
//! delivery channels the UI offers.

use crate::generator::{CodeFormat, SourceSet, Tool};
use anyhow::{Context, Result};
use std::path::Path;

/// A fully resolved export: what to save and how to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Suggested filename, stem derived from the tool
    pub filename: String,
    /// Media type for the format
    pub media_type: &'static str,
    /// Source text to deliver
    pub text: String,
}

/// Filename stem used for a tool's exports.
#[must_use]
pub const fn filename_stem(tool: Tool) -> &'static str {
    match tool {
        Tool::Grid => "grid-layout",
        Tool::Button => "custom-button",
        Tool::Input => "custom-input",
    }
}

/// File extension for a format. The combined document is a complete
/// HTML snippet, so it shares the `.html` extension.
#[must_use]
pub const fn extension(format: CodeFormat) -> &'static str {
    match format {
        CodeFormat::Html | CodeFormat::Combined => "html",
        CodeFormat::Css => "css",
        CodeFormat::Js => "js",
    }
}

/// Media type for a format.
#[must_use]
pub const fn media_type(format: CodeFormat) -> &'static str {
    match format {
        CodeFormat::Html | CodeFormat::Combined => "text/html",
        CodeFormat::Css => "text/css",
        CodeFormat::Js => "text/javascript",
    }
}

/// Builds the payload for a tool, format, and source set.
#[must_use]
pub fn payload(tool: Tool, format: CodeFormat, sources: &SourceSet) -> ExportPayload {
    ExportPayload {
        filename: format!("{}.{}", filename_stem(tool), extension(format)),
        media_type: media_type(format),
        text: sources.text(format),
    }
}

/// Writes a payload to disk using a temp file + rename pattern so the
/// target is never left half-written.
pub fn write_payload(path: &Path, payload: &ExportPayload) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory: {}", parent.display())
            })?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, &payload.text).with_context(|| {
        format!("Failed to write to temporary file: {}", temp_path.display())
    })?;
    std::fs::rename(&temp_path, path).with_context(|| {
        format!("Failed to rename temporary file to: {}", path.display())
    })?;

    Ok(())
}

/// Copies a payload's text to the system clipboard.
///
/// Clipboard access can fail on headless systems; callers surface the
/// error in the status bar rather than aborting.
pub fn copy_to_clipboard(payload: &ExportPayload) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(payload.text.clone())
        .context("Failed to copy to clipboard")?;
    Ok(())
}
