//! Docquest CLI
//!
//! Main entry point for the docquest command-line tool.
//! Answers natural-language questions from the text of a single document.

mod commands;
mod document;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChunksCommand, ConfigCommand};
use docquest_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Docquest - extractive question answering over documents
#[derive(Parser, Debug)]
#[command(name = "docquest")]
#[command(about = "Answer questions from the text of a document", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "DOCQUEST_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "DOCQUEST_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a question from a document
    Ask(AskCommand),

    /// Show how a document is chunked and scored
    Chunks(ChunksCommand),

    /// Show or initialize answer configuration
    Config(ConfigCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Docquest CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chunks(_) => "chunks",
        Commands::Config(_) => "config",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config),
        Commands::Chunks(cmd) => cmd.execute(&config),
        Commands::Config(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
