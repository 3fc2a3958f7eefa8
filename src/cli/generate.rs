//! Generate command: print generated sources for a tool configuration.

use crate::cli::common::{CliError, CliResult};
use crate::export as export_adapter;
use crate::generator::{recompute, CodeFormat, RenderOutput, Tool, ToolConfig};
use crate::models::{
    ButtonConfig, ButtonIcon, GridConfig, HexColor, HoverEffect, InputConfig,
    InputKind, ItemAlignment, LayoutMode,
};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Generate design source code headlessly
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub tool: ToolCommand,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output selection shared by the generate and export commands.
///
/// These are global flags so they can follow the tool subcommand on the
/// command line.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Source format: html, css, js, or combined
    #[arg(long, value_name = "FORMAT", default_value = "combined", global = true)]
    pub format: String,

    /// Output a JSON summary instead of the raw source
    #[arg(long, global = true)]
    pub json: bool,
}

/// Tool selection with per-tool configuration flags.
#[derive(Debug, Clone, Subcommand)]
pub enum ToolCommand {
    /// CSS grid layout generator
    Grid(GridToolArgs),
    /// Button design generator
    Button(ButtonToolArgs),
    /// Form input design generator
    Input(InputToolArgs),
}

/// Grid configuration flags
#[derive(Debug, Clone, Args)]
pub struct GridToolArgs {
    /// Number of rows (1-12)
    #[arg(long, default_value_t = 3)]
    pub rows: u32,

    /// Number of columns (1-12)
    #[arg(long, default_value_t = 3)]
    pub cols: u32,

    /// Gap between cells in pixels (0-50)
    #[arg(long, default_value_t = 10)]
    pub gap: u32,

    /// Minimum cell size in pixels (20-200)
    #[arg(long, default_value_t = 80)]
    pub cell_min: u32,

    /// Layout mode: static, flexible, auto, or mixed
    #[arg(long, value_name = "MODE", default_value = "flexible")]
    pub layout: String,

    /// Vertical item alignment: stretch, start, center, or end
    #[arg(long, value_name = "ALIGN", default_value = "stretch")]
    pub align: String,

    /// Horizontal item alignment: stretch, start, center, or end
    #[arg(long, value_name = "ALIGN", default_value = "stretch")]
    pub justify: String,

    /// Cell color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#4361ee")]
    pub color: String,

    /// Hide the coordinate labels inside cells
    #[arg(long)]
    pub no_labels: bool,
}

/// Button configuration flags
#[derive(Debug, Clone, Args)]
pub struct ButtonToolArgs {
    /// Button label text
    #[arg(long, default_value = "Click Me")]
    pub text: String,

    /// Width in pixels (60-400)
    #[arg(long, default_value_t = 160)]
    pub width: u32,

    /// Height in pixels (24-160)
    #[arg(long, default_value_t = 48)]
    pub height: u32,

    /// Corner radius in pixels (0-50)
    #[arg(long, default_value_t = 8)]
    pub radius: u32,

    /// Border width in pixels (0-10)
    #[arg(long, default_value_t = 2)]
    pub border_width: u32,

    /// Background color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#4361ee")]
    pub bg: String,

    /// Border color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#4361ee")]
    pub border_color: String,

    /// Text color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#ffffff")]
    pub text_color: String,

    /// Hover effect: none, darken, lighten, grow, shrink, or rotate
    #[arg(long, value_name = "EFFECT", default_value = "none")]
    pub hover: String,

    /// Icon name: heart, star, check, arrow-right, or download
    #[arg(long, value_name = "NAME")]
    pub icon: Option<String>,

    /// Add a drop shadow
    #[arg(long)]
    pub shadow: bool,

    /// Add the pulse animation
    #[arg(long)]
    pub pulse: bool,
}

/// Form input configuration flags
#[derive(Debug, Clone, Args)]
pub struct InputToolArgs {
    /// Input kind: text, email, password, number, tel, date, time,
    /// select, textarea, radio, or checkbox
    #[arg(long, value_name = "KIND", default_value = "text")]
    pub kind: String,

    /// Field label text
    #[arg(long, default_value = "Username")]
    pub label: String,

    /// Placeholder text
    #[arg(long, default_value = "Enter your username")]
    pub placeholder: String,

    /// Mark the field optional instead of required
    #[arg(long)]
    pub optional: bool,

    /// Render the field disabled
    #[arg(long)]
    pub disabled: bool,

    /// Corner radius in pixels (0-30)
    #[arg(long, default_value_t = 8)]
    pub radius: u32,

    /// Show a leading icon for text-like kinds
    #[arg(long)]
    pub icon: bool,

    /// Label and text color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#1a1a2e")]
    pub text_color: String,

    /// Background color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#ffffff")]
    pub bg: String,

    /// Border color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#dddddd")]
    pub border_color: String,

    /// Focus accent color as a hex value
    #[arg(long, value_name = "HEX", default_value = "#4361ee")]
    pub focus_color: String,
}

/// JSON summary for `--json` output
#[derive(Serialize, Debug)]
struct GenerateSummary {
    tool: String,
    format: String,
    filename: String,
    media_type: String,
    bytes: usize,
    lines: usize,
}

impl ToolCommand {
    /// Builds the configuration snapshot from the flags.
    ///
    /// Out-of-range numbers clamp and unknown names fall back to their
    /// defaults; no flag combination is rejected.
    #[must_use]
    pub fn to_config(&self) -> ToolConfig {
        match self {
            Self::Grid(args) => ToolConfig::Grid(args.to_config()),
            Self::Button(args) => ToolConfig::Button(args.to_config()),
            Self::Input(args) => ToolConfig::Input(args.to_config()),
        }
    }
}

impl GridToolArgs {
    fn to_config(&self) -> GridConfig {
        let mut config = GridConfig::default();
        config.set_rows(self.rows);
        config.set_cols(self.cols);
        config.set_gap(self.gap);
        config.set_cell_min(self.cell_min);
        config.layout_mode = LayoutMode::from_name(&self.layout);
        config.align_items = ItemAlignment::from_name(&self.align);
        config.justify_items = ItemAlignment::from_name(&self.justify);
        config.cell_color = HexColor::from_hex_or(&self.color, config.cell_color);
        config.show_cell_text = !self.no_labels;
        config
    }
}

impl ButtonToolArgs {
    fn to_config(&self) -> ButtonConfig {
        let mut config = ButtonConfig::default();
        config.set_text(self.text.clone());
        config.set_width(self.width);
        config.set_height(self.height);
        config.set_border_radius(self.radius);
        config.set_border_width(self.border_width);
        config.bg_color = HexColor::from_hex_or(&self.bg, config.bg_color);
        config.border_color =
            HexColor::from_hex_or(&self.border_color, config.border_color);
        config.text_color = HexColor::from_hex_or(&self.text_color, config.text_color);
        config.hover_effect = HoverEffect::from_name(&self.hover);
        if let Some(name) = &self.icon {
            config.add_icon = true;
            config.icon = ButtonIcon::from_name(name);
        }
        config.add_shadow = self.shadow;
        config.pulse_animation = self.pulse;
        config
    }
}

impl InputToolArgs {
    fn to_config(&self) -> InputConfig {
        let mut config = InputConfig::default();
        config.kind = InputKind::from_name(&self.kind);
        config.set_label(self.label.clone());
        config.set_placeholder(self.placeholder.clone());
        config.required = !self.optional;
        config.disabled = self.disabled;
        config.set_border_radius(self.radius);
        config.add_icon = self.icon;
        config.text_color = HexColor::from_hex_or(&self.text_color, config.text_color);
        config.bg_color = HexColor::from_hex_or(&self.bg, config.bg_color);
        config.border_color =
            HexColor::from_hex_or(&self.border_color, config.border_color);
        config.focus_color =
            HexColor::from_hex_or(&self.focus_color, config.focus_color);
        config
    }
}

/// Resolves the tool, format, and render output for a command.
#[must_use]
pub fn resolve(tool: &ToolCommand, output: &OutputArgs) -> (Tool, CodeFormat, RenderOutput) {
    let config = tool.to_config();
    let format = CodeFormat::from_name(&output.format);
    let rendered = recompute(&config);
    (config.tool(), format, rendered)
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let (tool, format, rendered) = resolve(&self.tool, &self.output);
        let payload = export_adapter::payload(tool, format, &rendered.sources);

        if self.output.json {
            let metrics = rendered.sources.metrics();
            let summary = GenerateSummary {
                tool: tool.name().to_string(),
                format: format.name().to_string(),
                filename: payload.filename,
                media_type: payload.media_type.to_string(),
                bytes: metrics.bytes,
                lines: metrics.lines,
            };
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{}", payload.text);
        }

        Ok(())
    }
}
