//! DesignForge library
//!
//! Core functionality for the DesignForge design generators: the
//! configuration models, the template engine that turns a configuration
//! into preview directives and source code, and the TUI and CLI layers
//! built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod generator;
pub mod models;
pub mod preview;
pub mod tui;
