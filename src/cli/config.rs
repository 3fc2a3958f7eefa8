//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::generator::Tool;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Tool selected on startup (grid, button, or input)
    #[arg(long, value_name = "TOOL")]
    default_tool: Option<String>,

    /// Export output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    ui: UiOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_tool: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none() && self.default_tool.is_none() && self.output_dir.is_none() {
            return Err(CliError::validation(
                "No values to set. Use --theme, --default-tool, or --output-dir",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if let Some(theme) = &self.theme {
            if !matches!(theme.to_lowercase().as_str(), "auto" | "dark" | "light") {
                return Err(CliError::validation(format!(
                    "Invalid theme '{theme}'. Must be 'auto', 'dark', or 'light'"
                )));
            }
            config.ui.theme = ThemeMode::from_name(theme);
            println!("Theme set to: {}", config.ui.theme.name());
        }

        if let Some(tool) = &self.default_tool {
            if !matches!(tool.to_lowercase().as_str(), "grid" | "button" | "input") {
                return Err(CliError::validation(format!(
                    "Invalid tool '{tool}'. Must be 'grid', 'button', or 'input'"
                )));
            }
            config.ui.default_tool = Tool::from_name(tool);
            println!("Default tool set to: {}", config.ui.default_tool.name());
        }

        if let Some(dir) = &self.output_dir {
            config.export.output_dir.clone_from(dir);
            println!("Export directory set to: {}", dir.display());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        Ok(())
    }
}

fn output_human_readable(config: &Config) {
    println!("Current configuration:");
    println!("  Theme:            {}", config.ui.theme.name());
    println!("  Default tool:     {}", config.ui.default_tool.name());
    println!(
        "  Export directory: {}",
        config.export.output_dir.display()
    );
}

fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        ui: UiOutput {
            theme: config.ui.theme.name().to_string(),
            default_tool: config.ui.default_tool.name().to_string(),
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.display().to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;
    println!("{json}");

    Ok(())
}
