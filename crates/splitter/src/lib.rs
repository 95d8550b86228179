//! Separator-aware text chunking.
//!
//! Splits text, or language-aware source code, into bounded-size chunks for
//! embedding and retrieval pipelines:
//! - a recursive splitter that walks a coarse-to-fine separator hierarchy
//! - a paragraph-accumulating splitter
//! - size enforcement so no chunk exceeds the configured limit
//! - optional overlap stitching between neighbouring chunks
//!
//! # Example
//! ```
//! use chunkwise_splitter::{split, Language, SplitterConfig};
//!
//! let config = SplitterConfig::for_language(Language::Markdown)?;
//! let chunks = split("# Title\n\nSome text.", &config);
//! assert!(!chunks.is_empty());
//! # Ok::<(), chunkwise_core::AppError>(())
//! ```

pub mod config;
pub mod language;
pub mod metric;
pub mod pipeline;
pub mod postprocess;
pub mod separator;
pub mod settings;
pub mod slicer;
pub mod splitters;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use config::{SplitterConfig, SplitterConfigBuilder};
pub use language::{separators_for_language, Language};
pub use metric::{LengthFn, LengthMetric};
pub use pipeline::Strategy;
pub use postprocess::{apply_overlap, enforce_chunk_size};
pub use separator::Separator;
pub use settings::Settings;
pub use slicer::slice_by_count;
pub use splitters::{AdaptiveSplitter, ChunkSplitter, RecursiveSplitter};

use chunkwise_core::AppResult;

/// Build a ready-to-use configuration for a language tag.
///
/// Fails with `AppError::UnsupportedLanguage` only for tags without a table;
/// `Language::Default` yields a size/overlap-only configuration.
pub fn new_splitter_for_language(language: Language) -> AppResult<SplitterConfig> {
    SplitterConfig::for_language(language)
}

/// Split with the recursive separator strategy.
///
/// Without separators the text is sliced into fixed-width windows. The result
/// is size-enforced and, when overlap is configured, stitched.
pub fn split(text: &str, config: &SplitterConfig) -> Vec<String> {
    RecursiveSplitter.split(text, config)
}

/// Split by packing whole paragraphs into chunks.
pub fn adaptive_split(text: &str, config: &SplitterConfig) -> Vec<String> {
    AdaptiveSplitter.split(text, config)
}
