//! Splitting strategies.

mod adaptive;
mod recursive;

pub use adaptive::AdaptiveSplitter;
pub use recursive::{split_recursive, RecursiveSplitter};

use crate::config::SplitterConfig;

/// Trait for chunk splitters.
///
/// Implementations run their raw splitting, size enforcement and, when
/// configured, overlap stitching.
pub trait ChunkSplitter {
    /// Split text into ordered chunks.
    fn split(&self, text: &str, config: &SplitterConfig) -> Vec<String>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
