//! Paragraph-accumulating splitter.

use super::ChunkSplitter;
use crate::config::SplitterConfig;
use crate::postprocess::{apply_overlap, enforce_chunk_size};

/// Paragraph boundary used both to split the input and to join paragraphs
/// inside a chunk.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Greedily packs whole paragraphs into chunks up to the chunk size.
///
/// A paragraph that would overflow a non-empty buffer starts a new chunk. A
/// single paragraph larger than the limit is cut by size enforcement.
pub struct AdaptiveSplitter;

impl ChunkSplitter for AdaptiveSplitter {
    fn split(&self, text: &str, config: &SplitterConfig) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut paragraphs = 0usize;

        for para in text.split(PARAGRAPH_BREAK).map(str::trim) {
            if para.is_empty() {
                continue;
            }
            paragraphs += 1;

            let overflows = !buffer.is_empty()
                && config.measure(&candidate(&buffer, para)) > config.chunk_size();

            if overflows {
                finalize(&mut chunks, &buffer, config);
                buffer.clear();
                buffer.push_str(para);
            } else {
                if !buffer.is_empty() {
                    buffer.push_str(PARAGRAPH_BREAK);
                }
                buffer.push_str(para);
            }
        }

        if !buffer.is_empty() {
            finalize(&mut chunks, &buffer, config);
        }

        if config.overlap() > 0 {
            chunks = apply_overlap(chunks, config.overlap());
        }

        tracing::debug!(
            "Adaptive splitter packed {} paragraphs into {} chunks",
            paragraphs,
            chunks.len()
        );

        chunks
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}

fn candidate(buffer: &str, para: &str) -> String {
    let mut joined = String::with_capacity(buffer.len() + PARAGRAPH_BREAK.len() + para.len());
    joined.push_str(buffer);
    joined.push_str(PARAGRAPH_BREAK);
    joined.push_str(para);
    joined
}

fn finalize(chunks: &mut Vec<String>, buffer: &str, config: &SplitterConfig) {
    let chunk = buffer.trim().to_string();
    chunks.extend(enforce_chunk_size(vec![chunk], config));
}
