//! Chunk post-processing: size enforcement and overlap stitching.

use crate::config::SplitterConfig;
use crate::slicer::{slice_by_count, slice_by_metric};

/// Guarantee that no chunk exceeds the configured size.
///
/// Oversized chunks are replaced by fixed-width code-point slices. When the
/// metric is not a character count a slice may still measure above the limit;
/// such slices are re-cut greedily by the metric itself. Chunks within the
/// limit pass through untouched, so applying this twice changes nothing.
pub fn enforce_chunk_size(chunks: Vec<String>, config: &SplitterConfig) -> Vec<String> {
    let limit = config.chunk_size();
    let mut result = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if config.measure(&chunk) <= limit {
            result.push(chunk);
            continue;
        }

        for piece in slice_by_count(&chunk, limit) {
            if config.length().is_chars() || config.measure(&piece) <= limit {
                result.push(piece);
            } else {
                result.extend(slice_by_metric(&piece, limit, config.length()));
            }
        }
    }

    result
}

/// Append to each chunk a prefix of its successor.
///
/// The prefix is `overlap` characters long, preceded by a newline. It is only
/// added when the successor is strictly longer than the prefix; the last chunk
/// is always returned unchanged.
pub fn apply_overlap(chunks: Vec<String>, overlap: usize) -> Vec<String> {
    if overlap == 0 || chunks.len() < 2 {
        return chunks;
    }

    let mut overlapped = Vec::with_capacity(chunks.len());

    for (i, current) in chunks.iter().enumerate() {
        let Some(next) = chunks.get(i + 1) else {
            overlapped.push(current.clone());
            break;
        };

        let next_len = next.chars().count();
        let take = overlap.min(next_len);

        if take > 0 && take < next_len {
            let prefix_end = next
                .char_indices()
                .nth(take)
                .map(|(idx, _)| idx)
                .unwrap_or(next.len());

            let mut stitched = String::with_capacity(current.len() + 1 + prefix_end);
            stitched.push_str(current);
            stitched.push('\n');
            stitched.push_str(&next[..prefix_end]);
            overlapped.push(stitched);
        } else {
            overlapped.push(current.clone());
        }
    }

    overlapped
}
