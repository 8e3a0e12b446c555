//! TeXpad - Terminal LaTeX equation editor
//!
//! Write LaTeX in a text pane, see it typeset live, insert snippet
//! templates from a palette, pick a text color, and export the result
//! as a PNG file or a clipboard image.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use texpad::cli::ExportArgs;
use texpad::config::Config;
use texpad::constants::{APP_BINARY_NAME, APP_NAME, DEFAULT_SOURCE};
use texpad::models::RgbColor;
use texpad::render::Renderer;
use texpad::tui;

/// TeXpad - Terminal LaTeX equation editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a LaTeX source file to open in the editor
    #[arg(value_name = "FILE")]
    source_path: Option<PathBuf>,

    /// Initial text color as a hex string (overrides config)
    #[arg(long, value_name = "HEX")]
    color: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Typeset a LaTeX expression and save it as a PNG image
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Export(args)) = cli.command {
        match args.execute() {
            Ok(path) => {
                println!("Exported {}", path.display());
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!();
                eprintln!("For usage, run:");
                eprintln!("  {APP_BINARY_NAME} export --help");
                std::process::exit(e.exit_code.code());
            }
        }
    }

    let (config, config_notice) = Config::load_or_default();

    // Seed the editor from a file when one is given
    let source = match &cli.source_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Source file not found: {}", path.display());
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} equation.tex");
                eprintln!("  {APP_BINARY_NAME} export \"\\\\alpha + \\\\beta\"");
                std::process::exit(1);
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
                .trim_end()
                .to_string()
        }
        None => DEFAULT_SOURCE.to_string(),
    };

    let color_hex = cli
        .color
        .unwrap_or_else(|| config.editor.default_color.clone());
    let color = RgbColor::from_hex(&color_hex)
        .with_context(|| format!("Invalid color '{color_hex}'"))?;

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal LaTeX equation editor");
    println!();

    // The first render boots the embedded MathJax runtime
    let renderer = Renderer::mathjax();

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, renderer, source, color)?;
    if let Some(notice) = config_notice {
        app_state.set_status_with_style(notice, app_state.theme.warning);
    }

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
