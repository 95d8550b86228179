//! Chunkwise CLI
//!
//! Main entry point for the chunkwise command-line tool.
//! Splits text and source code into bounded-size chunks for indexing.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{InitCommand, LanguagesCommand, SplitCommand};
use chunkwise_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Chunkwise - separator-aware text chunking for retrieval pipelines
#[derive(Parser, Debug)]
#[command(name = "chunkwise")]
#[command(about = "Separator-aware text chunking for retrieval pipelines", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "CHUNKWISE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split files, directories or stdin into chunks
    Split(SplitCommand),

    /// List supported languages and their separators
    Languages(LanguagesCommand),

    /// Write a chunking config file
    Init(InitCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let config = config.with_overrides(cli.log_level, cli.verbose, cli.no_color);

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Chunking: {:?}", config.chunking);

    let command_name = match &cli.command {
        Commands::Split(_) => "split",
        Commands::Languages(_) => "languages",
        Commands::Init(_) => "init",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Split(cmd) => cmd.execute(&config),
        Commands::Languages(cmd) => cmd.execute(),
        Commands::Init(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
