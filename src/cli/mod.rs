//! CLI command handlers for DesignForge.
//!
//! This module provides headless, scriptable access to the design
//! generators for automation, testing, and CI integration.

pub mod common;
pub mod config;
pub mod export;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
