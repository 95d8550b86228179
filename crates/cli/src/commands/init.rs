//! Init command handler.
//!
//! Writes the effective chunking configuration to a YAML file.

use clap::Args;
use chunkwise_core::{config::{AppConfig, DEFAULT_CONFIG_FILE}, AppError, AppResult};
use chunkwise_splitter::Settings;
use std::path::PathBuf;

use super::ChunkingArgs;

/// Write a chunking config file
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Where to write the config
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing init command");

        if self.output.exists() && !self.force {
            return Err(AppError::Config(format!(
                "{:?} already exists (use --force to overwrite)",
                self.output
            )));
        }

        let chunking = self.chunking.apply(config.chunking.clone());
        let settings = Settings::resolve(&chunking)?;

        let mut effective = config.clone();
        effective.chunking = settings.to_chunking();
        effective.save_chunking(&self.output)?;

        println!(
            "Wrote {:?} (language={}, strategy={}, chunk size={}, overlap={})",
            self.output,
            settings.language,
            settings.strategy,
            settings.config.chunk_size(),
            settings.config.overlap()
        );

        Ok(())
    }
}
