//! Keyword extraction from questions and passages.
//!
//! Keywords keep duplicates in input order. Sentence scoring counts every
//! occurrence, so a word repeated in the question weighs more.

use crate::language::{language, Language};
use unicode_segmentation::UnicodeSegmentation;

/// Minimum characters for a keyword.
const MIN_KEYWORD_CHARS: usize = 3;

/// Minimum characters for a raw question word used as a search term.
const MIN_SEARCH_TERM_CHARS: usize = 4;

/// Extract content-bearing lowercase keywords from text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_keywords_with(text, language())
}

/// Extract keywords with explicit language resources.
///
/// Without resources the text is split on whitespace with no filtering.
pub fn extract_keywords_with(text: &str, language: Option<&Language>) -> Vec<String> {
    let lower = text.to_lowercase();

    match language {
        Some(language) => lower
            .unicode_words()
            .filter(|word| {
                word.chars().count() >= MIN_KEYWORD_CHARS
                    && word.chars().all(char::is_alphanumeric)
                    && !language.is_stop_word(word)
            })
            .map(str::to_string)
            .collect(),
        None => lower.split_whitespace().map(str::to_string).collect(),
    }
}

/// Terms for literal substring search over chunks.
///
/// Uses the question's keywords; when none survive extraction, falls back
/// to the raw question words of four or more characters.
pub fn search_terms(question: &str) -> Vec<String> {
    let keywords = extract_keywords(question);
    if !keywords.is_empty() {
        return keywords;
    }

    question
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() >= MIN_SEARCH_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Count how many terms occur in `text` as case-insensitive substrings.
///
/// Terms must already be lowercase; every entry counts, duplicates included.
pub fn count_matches(text: &str, terms: &[String]) -> usize {
    let lower = text.to_lowercase();
    terms
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .count()
}
