//! Recursive separator splitter.

use super::ChunkSplitter;
use crate::config::SplitterConfig;
use crate::postprocess::{apply_overlap, enforce_chunk_size};
use crate::separator::Separator;
use crate::slicer::slice_by_count;

/// Splits at the coarsest separator present, recursing into oversized pieces
/// with the finer separators that follow it.
///
/// With no separators configured it degenerates to fixed-width slicing.
pub struct RecursiveSplitter;

impl ChunkSplitter for RecursiveSplitter {
    fn split(&self, text: &str, config: &SplitterConfig) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let raw = if config.separators().is_empty() {
            slice_by_count(text, config.chunk_size())
        } else {
            split_recursive(text, config.separators(), config)
        };
        let raw_count = raw.len();

        let mut chunks = enforce_chunk_size(raw, config);
        if config.overlap() > 0 {
            chunks = apply_overlap(chunks, config.overlap());
        }

        tracing::debug!(
            "Recursive splitter created {} chunks ({} raw) from {} bytes",
            chunks.len(),
            raw_count,
            text.len()
        );

        chunks
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// Split `text` over the ordered `separators`, coarsest first.
///
/// Pieces measuring below the chunk size are emitted as they are; larger ones
/// are split again with the separators after the one that matched. When no
/// finer separator remains the piece is emitted oversized and left to size
/// enforcement. Each call narrows the list, so recursion depth is bounded by
/// its length.
pub fn split_recursive(text: &str, separators: &[Separator], config: &SplitterConfig) -> Vec<String> {
    split_at_depth(text, separators, config, 0)
}

fn split_at_depth(
    text: &str,
    separators: &[Separator],
    config: &SplitterConfig,
    depth: usize,
) -> Vec<String> {
    let Some(last) = separators.last() else {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        };
    };

    let (active, finer) = match separators.iter().position(|sep| sep.is_match(text)) {
        Some(i) => (&separators[i], &separators[i + 1..]),
        None => (last, &separators[separators.len()..]),
    };

    tracing::trace!(
        depth,
        separator = ?active.pattern(),
        remaining = finer.len(),
        "Splitting {} bytes",
        text.len()
    );

    let mut chunks = Vec::new();
    for piece in active.split(text, config.keep_separator()) {
        if config.measure(piece) < config.chunk_size() {
            chunks.push(piece.to_string());
        } else if !finer.is_empty() {
            chunks.extend(split_at_depth(piece, finer, config, depth + 1));
        } else {
            chunks.push(piece.to_string());
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn config(chunk_size: usize, separators: &[&str], keep: bool) -> SplitterConfig {
        SplitterConfig::builder()
            .separators(separators.iter().copied(), false)
            .unwrap()
            .chunk_size(chunk_size)
            .keep_separator(keep)
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_separators_slices_by_count() {
        let config = SplitterConfig::builder().chunk_size(5).build().unwrap();
        let chunks = RecursiveSplitter.split("AAAA BBBB CCCC", &config);
        assert_eq!(chunks, vec!["AAAA ", "BBBB ", "CCCC"]);
    }

    #[test]
    fn test_example_with_overlap() {
        let config = SplitterConfig::builder().chunk_size(5).overlap(2).build().unwrap();
        let chunks = RecursiveSplitter.split("AAAA BBBB CCCC", &config);
        assert_eq!(chunks, vec!["AAAA \nBB", "BBBB \nCC", "CCCC"]);
    }

    #[test]
    fn test_coarsest_matching_separator_wins() {
        let config = config(20, &["\n\n", "\n", " ", ""], false);
        let chunks = split_recursive("para one\n\npara two", config.separators(), &config);
        assert_eq!(chunks, vec!["para one", "para two"]);
    }

    #[test]
    fn test_skips_absent_separators() {
        let config = config(4, &["\n\n", "\n", " ", ""], false);
        let chunks = split_recursive("ab cd ef", config.separators(), &config);
        assert_eq!(chunks, vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn test_recurses_into_oversized_piece() {
        let config = config(7, &["\n", " ", ""], false);
        let chunks = split_recursive("short\nlonger words", config.separators(), &config);
        assert_eq!(chunks, vec!["short", "longer", "words"]);
    }

    #[test]
    fn test_piece_equal_to_size_is_split_further() {
        let config = config(3, &[" ", ""], false);
        let chunks = split_recursive("abc d", config.separators(), &config);
        assert_eq!(chunks, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_match_forces_last_separator() {
        let config = config(2, &["\n", "|"], false);
        let chunks = split_recursive("abcdef", config.separators(), &config);
        // "|" is forced, does not split, and nothing finer remains
        assert_eq!(chunks, vec!["abcdef"]);

        let enforced = RecursiveSplitter.split("abcdef", &config);
        assert_eq!(enforced, vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn test_keep_separator_reconstructs() {
        let config = config(10, &["\n\n", "\n", " ", ""], true);
        let text = "first line\nsecond line\n\nthird paragraph here";
        let chunks = split_recursive(text, config.separators(), &config);
        assert_eq!(chunks.concat(), text);
        assert!(chunks.contains(&"\n\n".to_string()));
    }

    #[test]
    fn test_python_code() {
        let config = SplitterConfig::for_language(Language::Python)
            .unwrap()
            .into_builder()
            .chunk_size(40)
            .overlap(0)
            .build()
            .unwrap();
        let code = "import os\n\nclass Foo:\n    pass\n\ndef bar():\n    return 1\n\ndef baz():\n    return 2\n";
        let chunks = RecursiveSplitter.split(code, &config);

        assert!(chunks.len() >= 2);
        assert!(chunks[0].starts_with("import os"));
        assert!(chunks.iter().any(|c| c.starts_with("Foo:")));
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40);
        }
    }

    #[test]
    fn test_empty_text() {
        let config = SplitterConfig::for_language(Language::Go).unwrap();
        assert!(RecursiveSplitter.split("", &config).is_empty());
        assert!(RecursiveSplitter.split("", &SplitterConfig::default()).is_empty());
    }
}
