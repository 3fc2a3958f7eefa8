//! DesignForge - Terminal-based design generator
//!
//! Interactive TUI for designing CSS grids, buttons, and form inputs
//! with live preview and code generation, plus headless subcommands for
//! scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use designforge::cli::{ConfigArgs, ExportArgs, GenerateArgs};
use designforge::config::Config;
use designforge::tui;

/// DesignForge - Terminal-based design generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate design source code headlessly
    Generate(GenerateArgs),
    /// Export design source code to a file
    Export(ExportArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Generate(args) => args.execute(),
            Commands::Export(args) => args.execute(),
            Commands::Config(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code().code());
        }

        return Ok(());
    }

    // No subcommand: run the interactive TUI
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            Config::default()
        }
    };

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
