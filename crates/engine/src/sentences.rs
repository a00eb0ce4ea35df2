//! Sentence splitting and keyword re-scoring.
//!
//! Top-ranked chunks are broken into sentences, noise (headings, list
//! fragments) is filtered out, and the rest are re-scored by literal overlap
//! with the question's keywords.

use crate::keywords::count_matches;
use crate::types::AnswerConfig;
use std::collections::HashSet;

/// Common words whose presence marks a fragment as prose rather than a title
/// or enumeration.
const CONNECTIVES: &[&str] = &[
    "is", "are", "was", "were", "the", "a", "an", "to", "for", "of", "in", "on", "at",
];

const ELLIPSIS: &str = "...";

/// Limits for building an answer out of sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOptions {
    pub min_sentence_len: usize,
    pub max_sentences: usize,
    pub max_truncation_chars: usize,
}

impl From<&AnswerConfig> for SelectionOptions {
    fn from(config: &AnswerConfig) -> Self {
        Self {
            min_sentence_len: config.min_sentence_len,
            max_sentences: config.max_sentences,
            max_truncation_chars: config.max_truncation_chars,
        }
    }
}

/// How a selection was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// At least one sentence contains a question keyword
    KeywordMatched,
    /// Meaningful sentences exist but none contains a keyword
    Unmatched,
    /// No meaningful sentence; the best passage was truncated
    Truncated,
}

/// An answer assembled from passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub answer: String,
    pub kind: SelectionKind,
}

/// Split text on runs of terminal punctuation, trimming each fragment.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Whether a fragment reads like a sentence rather than a heading or list item.
pub fn is_meaningful(sentence: &str, min_len: usize) -> bool {
    let sentence = sentence.trim();

    if sentence.chars().count() < min_len {
        return false;
    }

    if sentence.ends_with(':') || sentence.ends_with(ELLIPSIS) || sentence.ends_with('…') {
        return false;
    }

    let lower = sentence.to_lowercase();
    lower
        .split_whitespace()
        .any(|word| CONNECTIVES.contains(&word))
}

/// Meaningful sentences of a text, in order.
pub fn meaningful_sentences(text: &str, min_len: usize) -> Vec<&str> {
    split_sentences(text)
        .filter(|s| is_meaningful(s, min_len))
        .collect()
}

/// Join sentences with a period and ensure terminal punctuation.
pub fn join_sentences(sentences: &[&str]) -> String {
    let mut answer = sentences.join(". ");
    if !answer.is_empty() && !answer.ends_with(['.', '!', '?']) {
        answer.push('.');
    }
    answer
}

/// Cut text to at most `max_chars` characters, marking the cut with an ellipsis.
///
/// Text already ending in a period is returned as is.
pub fn truncate_passage(text: &str, max_chars: usize) -> String {
    let mut passage: String = text.chars().take(max_chars).collect();
    let trimmed_len = passage.trim_end().len();
    passage.truncate(trimmed_len);

    if !passage.is_empty() && !passage.ends_with('.') {
        passage.push_str(ELLIPSIS);
    }
    passage
}

/// Whether `sentence` is the cut-off start or end of a longer sentence.
fn is_fragment_of_any(sentence: &str, sentences: &[&str]) -> bool {
    sentences.iter().any(|&other| {
        other.len() > sentence.len() && (other.starts_with(sentence) || other.ends_with(sentence))
    })
}

/// Pick the sentences that best answer the question.
///
/// `chunks` are the ranked passages, best first; `keywords` are the
/// question's keywords (lowercase, duplicates counted).
pub fn select_sentences(
    chunks: &[&str],
    keywords: &[String],
    options: &SelectionOptions,
) -> Selection {
    // Overlapping chunks share sentences; keep the first occurrence
    let mut seen = HashSet::new();
    let collected: Vec<&str> = chunks
        .iter()
        .flat_map(|&chunk| meaningful_sentences(chunk, options.min_sentence_len))
        .filter(|sentence| seen.insert(*sentence))
        .collect();

    // A window edge cuts a sentence into a fragment that heads or tails
    // the full sentence from the neighbouring chunk
    let sentences: Vec<&str> = collected
        .iter()
        .copied()
        .filter(|&sentence| !is_fragment_of_any(sentence, &collected))
        .collect();

    if sentences.is_empty() {
        let best = chunks.first().copied().unwrap_or("");
        tracing::debug!("No meaningful sentences, truncating best passage");
        return Selection {
            answer: truncate_passage(best, options.max_truncation_chars),
            kind: SelectionKind::Truncated,
        };
    }

    let mut scored: Vec<(usize, &str)> = sentences
        .iter()
        .map(|s| (count_matches(s, keywords), *s))
        .filter(|(score, _)| *score > 0)
        .collect();

    if scored.is_empty() {
        tracing::debug!(
            "None of {} sentences matched a keyword, keeping passage order",
            sentences.len()
        );
        let top: Vec<&str> = sentences.into_iter().take(options.max_sentences).collect();
        return Selection {
            answer: join_sentences(&top),
            kind: SelectionKind::Unmatched,
        };
    }

    // Stable sort keeps original order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    let top: Vec<&str> = scored
        .into_iter()
        .take(options.max_sentences)
        .map(|(_, s)| s)
        .collect();

    tracing::debug!("Selected {} keyword-matched sentences", top.len());

    Selection {
        answer: join_sentences(&top),
        kind: SelectionKind::KeywordMatched,
    }
}
