//! Answer orchestration.
//!
//! Runs normalization, chunking, ranking and sentence selection, and
//! demotes to the next fallback tier whenever a stage fails or comes back
//! empty. Tiers in order:
//!
//! 1. too short: the document cannot support an answer
//! 2. vector ranked: similarity match with keyword-supported sentences
//! 3. vector ranked, no keywords: similarity match, best sentences anyway
//! 4. keyword fallback: literal keyword search over the chunks
//! 5. no match: governed by [`LowConfidencePolicy`]
//!
//! Only precondition violations are returned as errors.

use crate::chunker::chunk_words;
use crate::keywords::{count_matches, extract_keywords, search_terms};
use crate::normalize::normalize_text;
use crate::rank::{rank_chunks, Ranking};
use crate::sentences::{
    join_sentences, meaningful_sentences, select_sentences, truncate_passage, SelectionKind,
    SelectionOptions,
};
use crate::types::{AnswerConfig, AnswerResult, Chunk, LowConfidencePolicy, Strategy};
use crate::vectorize::{TfIdfVectorizer, Vectorizer};
use docquest_core::{AppError, AppResult};

/// Answer for documents too short to answer from.
pub const TOO_SHORT_MESSAGE: &str =
    "The document doesn't contain enough text to answer questions.";

/// Answer a question from a document's text with the builtin TF-IDF vectorizer.
///
/// # Errors
/// `AppError::EmptyQuestion` for a blank question and `AppError::Config` for
/// invalid tuning parameters. Everything else yields an answer.
///
/// # Example
/// ```
/// use docquest_engine::{answer, AnswerConfig, Strategy};
///
/// let text = "The sky is blue. Water boils at 100 degrees Celsius at sea level. Cats are mammals.";
/// let result = answer(text, "At what temperature does water boil?", &AnswerConfig::default()).unwrap();
///
/// assert_eq!(result.strategy, Strategy::VectorRanked);
/// assert!(result.answer.contains("100 degrees Celsius"));
/// ```
pub fn answer(document_text: &str, question: &str, config: &AnswerConfig) -> AppResult<AnswerResult> {
    let vectorizer = TfIdfVectorizer::from_config(config);
    answer_with(&vectorizer, document_text, question, config)
}

/// Answer a question using the given vectorizer.
pub fn answer_with(
    vectorizer: &dyn Vectorizer,
    document_text: &str,
    question: &str,
    config: &AnswerConfig,
) -> AppResult<AnswerResult> {
    config.validate()?;

    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::EmptyQuestion);
    }

    let text = normalize_text(document_text);
    let text_chars = text.chars().count();
    if text_chars < config.min_document_chars {
        tracing::info!(
            "Document too short to answer from ({} < {} chars)",
            text_chars,
            config.min_document_chars
        );
        return Ok(AnswerResult::new(TOO_SHORT_MESSAGE.to_string(), Strategy::TooShort));
    }

    let chunks = chunk_document(&text, config);
    let keywords = extract_keywords(question);
    tracing::debug!("Question keywords: {:?}", keywords);

    let result = match rank_chunks(vectorizer, &chunks, question, config.top_k) {
        Ok(ranking) if ranking.is_match(config.similarity_threshold) => {
            vector_answer(&chunks, &ranking, &keywords, config)
        }
        Ok(ranking) => {
            tracing::info!(
                "Best similarity {:.4} below threshold {:.4}, falling back to keyword search",
                ranking.best_score().unwrap_or(0.0),
                config.similarity_threshold
            );
            keyword_answer(&text, &chunks, question, config).with_score(ranking.best_score())
        }
        Err(e) => {
            tracing::warn!(
                "Vectorization with {} failed, falling back to keyword search: {}",
                vectorizer.name(),
                e
            );
            keyword_answer(&text, &chunks, question, config)
        }
    };

    tracing::info!(
        "Answered with strategy {} from chunks {:?}",
        result.strategy,
        result.top_chunk_indices
    );

    Ok(result)
}

/// Chunk normalized text, treating it as one chunk when chunking yields nothing.
pub fn chunk_document(text: &str, config: &AnswerConfig) -> Vec<Chunk> {
    let chunks = chunk_words(text, config.chunk_size, config.overlap, config.min_chunk_chars);
    if !chunks.is_empty() {
        return chunks;
    }

    tracing::debug!("Chunking produced no chunks, using the whole document");
    vec![Chunk {
        index: 0,
        text: text.to_string(),
        word_range: (0, text.split_whitespace().count()),
    }]
}

/// Tiers 2 and 3: sentences from the top-ranked chunks.
fn vector_answer(
    chunks: &[Chunk],
    ranking: &Ranking,
    keywords: &[String],
    config: &AnswerConfig,
) -> AnswerResult {
    // Lower-ranked chunks only contribute when they clear the threshold too
    let matched: Vec<usize> = ranking
        .top
        .iter()
        .copied()
        .filter(|&i| ranking.scores[i] >= config.similarity_threshold)
        .collect();

    let passages: Vec<&str> = matched.iter().map(|&i| chunks[i].text.as_str()).collect();

    let selection = select_sentences(&passages, keywords, &SelectionOptions::from(config));
    let strategy = match selection.kind {
        SelectionKind::KeywordMatched => Strategy::VectorRanked,
        SelectionKind::Unmatched | SelectionKind::Truncated => Strategy::VectorRankedNoKeywords,
    };

    AnswerResult::new(selection.answer, strategy)
        .with_chunks(matched)
        .with_score(ranking.best_score())
}

/// Tier 4: the chunk with the most literal keyword hits, else tier 5.
fn keyword_answer(
    text: &str,
    chunks: &[Chunk],
    question: &str,
    config: &AnswerConfig,
) -> AnswerResult {
    let terms = search_terms(question);

    let mut best: Option<(usize, &Chunk)> = None;
    for chunk in chunks {
        let hits = count_matches(&chunk.text, &terms);
        if hits > best.map_or(0, |(best_hits, _)| best_hits) {
            best = Some((hits, chunk));
        }
    }

    match best {
        Some((hits, chunk)) => {
            tracing::debug!("Keyword search: chunk {} with {} hits", chunk.index, hits);
            let answer = passage_answer(&chunk.text, config);
            AnswerResult::new(answer, Strategy::KeywordFallback).with_chunks(vec![chunk.index])
        }
        None => no_match_answer(text, chunks, question, config),
    }
}

/// Tier 5.
fn no_match_answer(
    text: &str,
    chunks: &[Chunk],
    question: &str,
    config: &AnswerConfig,
) -> AnswerResult {
    tracing::info!("No passage matches the question");

    let answer = match config.low_confidence {
        LowConfidencePolicy::NotFound => format!(
            "I could not find information about \"{}\" in this document.",
            bounded(question.to_string(), config.max_truncation_chars)
        ),
        LowConfidencePolicy::BestEffort => {
            let sentences = meaningful_sentences(text, config.min_sentence_len);
            if sentences.is_empty() {
                let first = chunks.first().map_or(text, |c| c.text.as_str());
                truncate_passage(first, config.max_truncation_chars)
            } else {
                let lead: Vec<&str> = sentences.into_iter().take(config.max_sentences).collect();
                bounded(join_sentences(&lead), config.max_truncation_chars)
            }
        }
    };

    AnswerResult::new(answer, Strategy::NoMatch)
}

/// Meaningful sentences of one passage, or a truncation of it.
fn passage_answer(passage: &str, config: &AnswerConfig) -> String {
    let sentences = meaningful_sentences(passage, config.min_sentence_len);
    if sentences.is_empty() {
        return truncate_passage(passage, config.max_truncation_chars);
    }

    let lead: Vec<&str> = sentences.into_iter().take(config.max_sentences).collect();
    bounded(join_sentences(&lead), config.max_truncation_chars)
}

/// Keep fallback answers within the truncation budget.
fn bounded(answer: String, max_chars: usize) -> String {
    if answer.chars().count() <= max_chars {
        answer
    } else {
        truncate_passage(&answer, max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        assert_eq!(bounded("Short answer.".to_string(), 100), "Short answer.");
        assert_eq!(bounded("abcdefghij".to_string(), 4), "abcd...");
    }

    #[test]
    fn test_chunk_document_whole_document_fallback() {
        let config = AnswerConfig::default();
        let chunks = chunk_document("A short note of a few words.", &config);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "A short note of a few words.");
        assert_eq!(chunks[0].word_range, (0, 7));
    }

    #[test]
    fn test_keyword_answer_prefers_most_hits_then_earliest() {
        let config = AnswerConfig::default();
        let chunks = vec![
            Chunk {
                index: 0,
                text: "The harbor is busy in summer with fishing boats and ferries.".to_string(),
                word_range: (0, 11),
            },
            Chunk {
                index: 1,
                text: "The lighthouse at the harbor was built in 1890 from local granite.".to_string(),
                word_range: (11, 23),
            },
            Chunk {
                index: 2,
                text: "A second lighthouse at the harbor entrance was added in 1920.".to_string(),
                word_range: (23, 34),
            },
        ];

        let result = keyword_answer("", &chunks, "When was the harbor lighthouse built?", &config);
        assert_eq!(result.strategy, Strategy::KeywordFallback);
        assert_eq!(result.top_chunk_indices, vec![1]);
        assert!(result.answer.contains("1890"));
    }

    #[test]
    fn test_no_match_not_found_policy() {
        let config = AnswerConfig {
            low_confidence: LowConfidencePolicy::NotFound,
            ..Default::default()
        };

        let result = no_match_answer("Some text.", &[], "Where is the treasure?", &config);
        assert_eq!(result.strategy, Strategy::NoMatch);
        assert_eq!(
            result.answer,
            "I could not find information about \"Where is the treasure?\" in this document."
        );
        assert!(result.top_chunk_indices.is_empty());
    }

    #[test]
    fn test_not_found_message_bounds_question() {
        let config = AnswerConfig {
            low_confidence: LowConfidencePolicy::NotFound,
            max_truncation_chars: 20,
            ..Default::default()
        };
        let question = "Where exactly did the pirates bury the treasure chest on the island?";

        let result = no_match_answer("Some text.", &[], question, &config);
        assert_eq!(
            result.answer,
            "I could not find information about \"Where exactly did th...\" in this document."
        );
    }

    #[test]
    fn test_vector_answer_skips_chunks_below_threshold() {
        let config = AnswerConfig::default();
        let chunks = vec![
            Chunk {
                index: 0,
                text: "Roman aqueducts carried water from distant springs into the city.".to_string(),
                word_range: (0, 10),
            },
            Chunk {
                index: 1,
                text: "Beekeepers removed the honey frames to move them indoors for winter.".to_string(),
                word_range: (10, 21),
            },
        ];
        let ranking = Ranking {
            scores: vec![0.4, 0.0],
            top: vec![0, 1],
        };
        let keywords: Vec<String> = ["roman", "aqueducts", "move", "water"]
            .iter()
            .map(|k| k.to_string())
            .collect();

        let result = vector_answer(&chunks, &ranking, &keywords, &config);
        assert_eq!(result.strategy, Strategy::VectorRanked);
        assert_eq!(result.top_chunk_indices, vec![0]);
        assert_eq!(
            result.answer,
            "Roman aqueducts carried water from distant springs into the city."
        );
    }
}
