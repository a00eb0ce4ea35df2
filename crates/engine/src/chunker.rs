//! Word-window chunking with configurable size and overlap.

use crate::types::Chunk;

/// Split normalized text into overlapping word windows.
///
/// Windows hold `chunk_size` words and advance by `chunk_size - overlap`, so
/// consecutive chunks share exactly `overlap` words. Chunking stops at the
/// first window that reaches the end of the text.
///
/// A short tail window (fewer than `chunk_size` words and fewer than
/// `min_chunk_chars` characters) is degenerate: its words are folded into
/// the preceding chunk, or, when it is the only window, dropped so the
/// caller can decide what to rank.
///
/// Callers must ensure `overlap < chunk_size`.
pub fn chunk_words(
    text: &str,
    chunk_size: usize,
    overlap: usize,
    min_chunk_chars: usize,
) -> Vec<Chunk> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || chunk_size == 0 {
        return vec![];
    }

    let step = chunk_size.saturating_sub(overlap).max(1);
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + chunk_size).min(words.len());
        let window = words[start..end].join(" ");

        let is_tail = end == words.len() && end - start < chunk_size;
        if is_tail && window.chars().count() < min_chunk_chars {
            match chunks.last_mut() {
                Some(last) => {
                    let from = last.word_range.0;
                    last.text = words[from..end].join(" ");
                    last.word_range.1 = end;
                    tracing::trace!("Folded {} tail words into chunk {}", end - start, last.index);
                }
                None => tracing::debug!(
                    "Dropped single degenerate window ({} chars)",
                    window.chars().count()
                ),
            }
            break;
        }

        chunks.push(Chunk {
            index: chunks.len(),
            text: window,
            word_range: (start, end),
        });

        if end >= words.len() {
            break;
        }
        start += step;
    }

    tracing::debug!(
        "Chunked {} words into {} chunks (size: {}, overlap: {})",
        words.len(),
        chunks.len(),
        chunk_size,
        overlap
    );

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(count: usize) -> String {
        (0..count)
            .map(|i| format!("word{:04}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rebuild the word sequence by dropping each later chunk's overlap.
    fn reconstruct(chunks: &[Chunk], overlap: usize) -> Vec<String> {
        let mut words = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            let skip = if i == 0 { 0 } else { overlap };
            words.extend(chunk.text.split_whitespace().skip(skip).map(str::to_string));
        }
        words
    }

    #[test]
    fn test_chunk_basic() {
        let text = numbered_words(1000);
        let chunks = chunk_words(&text, 200, 50, 100);

        assert!(!chunks.is_empty());
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[1].index, 1);
        assert_eq!(chunks[0].word_range, (0, 200));
        assert_eq!(chunks[1].word_range, (150, 350));
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let text = numbered_words(730);
        let chunks = chunk_words(&text, 100, 25, 10);

        for pair in chunks.windows(2) {
            assert_eq!(pair[1].word_range.0, pair[0].word_range.1 - 25);
            let tail: Vec<&str> = pair[0].text.split_whitespace().rev().take(25).collect();
            let head: Vec<&str> = pair[1].text.split_whitespace().take(25).collect();
            assert_eq!(tail.into_iter().rev().collect::<Vec<_>>(), head);
        }
    }

    #[test]
    fn test_full_windows_kept_below_min_chars() {
        let text = vec!["ab"; 30].join(" ");
        let chunks = chunk_words(&text, 10, 2, 100);

        let ranges: Vec<(usize, usize)> = chunks.iter().map(|c| c.word_range).collect();
        assert_eq!(ranges, vec![(0, 10), (8, 18), (16, 30)]);

        let lengths: Vec<usize> = chunks.iter().map(|c| c.text.chars().count()).collect();
        assert_eq!(lengths, vec![29, 29, 41]);
    }

    #[test]
    fn test_reconstruction() {
        let text = numbered_words(1234);
        let expected: Vec<String> = text.split_whitespace().map(str::to_string).collect();

        for (size, overlap) in [(100, 20), (500, 100), (64, 0), (7, 6)] {
            let chunks = chunk_words(&text, size, overlap, 100);
            assert_eq!(
                reconstruct(&chunks, overlap),
                expected,
                "size {} overlap {}",
                size,
                overlap
            );
        }
    }

    #[test]
    fn test_short_tail_folded_into_previous_chunk() {
        // 205 words, size 100, overlap 0: the 5-word tail is under 100 chars
        let text = numbered_words(205);
        let chunks = chunk_words(&text, 100, 0, 100);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].word_range, (100, 205));
        assert_eq!(chunks[1].word_count(), 105);
        assert_eq!(reconstruct(&chunks, 0).len(), 205);
    }

    #[test]
    fn test_no_redundant_tail_window() {
        let text = numbered_words(400);
        let chunks = chunk_words(&text, 400, 100, 100);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_range, (0, 400));
    }

    #[test]
    fn test_short_text_single_chunk() {
        let text = "Rust is a systems programming language focused on safety, speed and concurrency without a garbage collector.";
        let chunks = chunk_words(text, 500, 100, 100);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_degenerate_single_window_dropped() {
        let chunks = chunk_words("Too short to rank.", 500, 100, 100);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_empty() {
        assert!(chunk_words("", 100, 10, 0).is_empty());
        assert!(chunk_words("   \n ", 100, 10, 0).is_empty());
    }
}
