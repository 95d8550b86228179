//! Command handlers for the chunkwise CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod init;
pub mod languages;
pub mod split;

// Re-export command types for convenience
pub use init::InitCommand;
pub use languages::LanguagesCommand;
pub use split::SplitCommand;

use chunkwise_core::ChunkingConfig;
use clap::Args;

/// Chunking options shared by commands that build a splitter.
#[derive(Args, Debug, Default, Clone)]
pub struct ChunkingArgs {
    /// Language tag (default, python, go, html, js, ts, markdown, json)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Splitting strategy (recursive, adaptive)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Length metric (chars, bytes, graphemes)
    #[arg(long)]
    pub metric: Option<String>,

    /// Maximum chunk size in metric units
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Characters of the next chunk appended to each chunk
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Keep matched separators as their own pieces
    #[arg(long)]
    pub keep_separator: bool,
}

impl ChunkingArgs {
    /// Layer these flags over a loaded chunking section.
    pub fn apply(&self, mut chunking: ChunkingConfig) -> ChunkingConfig {
        if let Some(language) = &self.language {
            chunking.language = Some(language.clone());
        }
        if let Some(strategy) = &self.strategy {
            chunking.strategy = Some(strategy.clone());
        }
        if let Some(metric) = &self.metric {
            chunking.metric = Some(metric.clone());
        }
        if let Some(size) = self.chunk_size {
            chunking.chunk_size = Some(size);
        }
        if let Some(overlap) = self.overlap {
            chunking.overlap = Some(overlap);
        }
        if self.keep_separator {
            chunking.keep_separator = Some(true);
        }
        chunking
    }
}
