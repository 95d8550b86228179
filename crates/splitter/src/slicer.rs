//! Fixed-width slicing on code-point boundaries.

use crate::metric::LengthMetric;

/// Split `text` into windows of exactly `size` code points.
///
/// The last window holds the remainder. Windows never cut through a
/// multi-byte character. A `size` of zero is treated as one.
///
/// ```
/// use chunkwise_splitter::slice_by_count;
///
/// assert_eq!(slice_by_count("AAAA BBBB CCCC", 5), vec!["AAAA ", "BBBB ", "CCCC"]);
/// ```
pub fn slice_by_count(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let mut chunks = Vec::with_capacity(text.len() / size + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(text[start..idx].to_string());
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(text[start..].to_string());
    }

    chunks
}

/// Greedily slice `text` so that every piece measures at most `limit`.
///
/// Used when code-point windows still exceed a non-character metric. A single
/// code point measuring above the limit is emitted on its own.
pub(crate) fn slice_by_metric(text: &str, limit: usize, metric: &LengthMetric) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for (idx, ch) in text.char_indices() {
        let next = idx + ch.len_utf8();
        if end > start && metric.measure(&text[start..next]) > limit {
            chunks.push(text[start..end].to_string());
            start = end;
        }
        end = next;
    }

    if start < text.len() {
        chunks.push(text[start..].to_string());
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_exact_windows() {
        let chunks = slice_by_count("abcdefgh", 4);
        assert_eq!(chunks, vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_slice_remainder() {
        let chunks = slice_by_count("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_slice_empty() {
        assert!(slice_by_count("", 10).is_empty());
    }

    #[test]
    fn test_slice_zero_size_makes_progress() {
        assert_eq!(slice_by_count("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_slice_utf8() {
        let text = "ação🎮çé";
        let chunks = slice_by_count(text, 2);
        assert_eq!(chunks, vec!["aç", "ão", "🎮ç", "é"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_slice_by_metric_bytes() {
        let metric = LengthMetric::Bytes;
        let chunks = slice_by_metric("ééééé", 4, &metric);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
        for chunk in &chunks {
            assert!(metric.measure(chunk) <= 4);
        }
    }

    #[test]
    fn test_slice_by_metric_oversized_char() {
        let chunks = slice_by_metric("a🎮b", 2, &LengthMetric::Bytes);
        assert_eq!(chunks, vec!["a", "🎮", "b"]);
    }
}
