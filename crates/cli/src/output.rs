//! Chunk output formatting.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Write;

use chunkwise_core::AppResult;

/// One emitted chunk, as written in JSON Lines mode.
#[derive(Debug, Serialize)]
pub struct ChunkRecord<'a> {
    /// File path, or "-" for stdin
    pub source: &'a str,

    /// Chunk position within the source (0-indexed)
    pub position: usize,

    pub text: &'a str,

    /// Length under the configured metric
    pub length: usize,

    /// SHA-256 of the chunk text
    pub hash: String,
}

impl<'a> ChunkRecord<'a> {
    pub fn new(source: &'a str, position: usize, text: &'a str, length: usize) -> Self {
        Self {
            source,
            position,
            text,
            length,
            hash: calculate_hash(text),
        }
    }

    /// Write as a single JSON line.
    pub fn write_json<W: Write>(&self, out: &mut W) -> AppResult<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write as a human-readable block.
    pub fn write_text<W: Write>(&self, out: &mut W) -> AppResult<()> {
        writeln!(
            out,
            "--- {} #{} ({} units) ---",
            self.source, self.position, self.length
        )?;
        writeln!(out, "{}", self.text)?;
        Ok(())
    }
}

/// Calculate SHA-256 hash of text.
pub fn calculate_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
