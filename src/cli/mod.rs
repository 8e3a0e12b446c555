//! CLI command handlers for TeXpad.
//!
//! This module provides headless, scriptable access to the render and
//! export pipeline for automation, testing, and CI integration.

pub mod common;
pub mod export;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use export::ExportArgs;
