//! Export command: write generated sources to a file.

use crate::cli::common::{CliError, CliResult};
use crate::cli::generate::{resolve, OutputArgs, ToolCommand};
use crate::config::Config;
use crate::export as export_adapter;
use clap::Args;
use std::path::PathBuf;

/// Export design source code to a file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub tool: ToolCommand,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Output path (defaults to the tool's filename in the configured
    /// export directory)
    #[arg(short = 'o', long, value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let (tool, format, rendered) = resolve(&self.tool, &self.output);
        let payload = export_adapter::payload(tool, format, &rendered.sources);

        let path = match &self.out {
            Some(path) => path.clone(),
            None => {
                let config = Config::load().unwrap_or_default();
                config.export.output_dir.join(&payload.filename)
            }
        };

        export_adapter::write_payload(&path, &payload)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported {} to: {}", tool.name(), path.display());

        Ok(())
    }
}
