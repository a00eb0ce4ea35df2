//! Answer engine type definitions.

use docquest_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Tuning parameters for answering a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words shared by consecutive chunks (must be < chunk_size)
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Number of top-ranked chunks handed to sentence selection
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Maximum sentences joined into an answer
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,

    /// Inclusive cosine cutoff for a chunk to count as a match
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Minimum characters for a sentence to be considered meaningful
    #[serde(default = "default_min_sentence_len")]
    pub min_sentence_len: usize,

    /// Character budget for truncated and fallback answers
    #[serde(default = "default_max_truncation_chars")]
    pub max_truncation_chars: usize,

    /// Chunks with fewer characters are discarded
    #[serde(default = "default_min_chunk_chars")]
    pub min_chunk_chars: usize,

    /// Documents with fewer normalized characters are too short to answer from
    #[serde(default = "default_min_document_chars")]
    pub min_document_chars: usize,

    /// Vocabulary cap of the term vector space
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Terms present in a larger fraction of items are dropped
    #[serde(default = "default_max_df")]
    pub max_df: f64,

    /// What to answer when nothing in the document matches
    #[serde(default)]
    pub low_confidence: LowConfidencePolicy,
}

fn default_chunk_size() -> usize {
    500
}

fn default_overlap() -> usize {
    100
}

fn default_top_k() -> usize {
    2
}

fn default_max_sentences() -> usize {
    3
}

fn default_similarity_threshold() -> f64 {
    0.05
}

fn default_min_sentence_len() -> usize {
    30
}

fn default_max_truncation_chars() -> usize {
    500
}

fn default_min_chunk_chars() -> usize {
    100
}

fn default_min_document_chars() -> usize {
    50
}

fn default_max_features() -> usize {
    200
}

fn default_max_df() -> f64 {
    0.95
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            top_k: default_top_k(),
            max_sentences: default_max_sentences(),
            similarity_threshold: default_similarity_threshold(),
            min_sentence_len: default_min_sentence_len(),
            max_truncation_chars: default_max_truncation_chars(),
            min_chunk_chars: default_min_chunk_chars(),
            min_document_chars: default_min_document_chars(),
            max_features: default_max_features(),
            max_df: default_max_df(),
            low_confidence: LowConfidencePolicy::default(),
        }
    }
}

impl AnswerConfig {
    /// Check structural validity. Invalid parameters are reported, never corrected.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_size == 0 {
            return Err(AppError::Config("chunk_size must be at least 1".to_string()));
        }

        if self.overlap >= self.chunk_size {
            return Err(AppError::Config(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }

        if self.top_k == 0 {
            return Err(AppError::Config("top_k must be at least 1".to_string()));
        }

        if self.max_sentences == 0 {
            return Err(AppError::Config(
                "max_sentences must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(AppError::Config(format!(
                "similarity_threshold ({}) must be within [0, 1]",
                self.similarity_threshold
            )));
        }

        if self.max_truncation_chars == 0 {
            return Err(AppError::Config(
                "max_truncation_chars must be at least 1".to_string(),
            ));
        }

        if self.max_features == 0 {
            return Err(AppError::Config("max_features must be at least 1".to_string()));
        }

        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(AppError::Config(format!(
                "max_df ({}) must be within (0, 1]",
                self.max_df
            )));
        }

        Ok(())
    }
}

/// Answer policy for questions nothing in the document matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowConfidencePolicy {
    /// Return the document's leading content anyway
    #[default]
    BestEffort,
    /// Return an explicit "could not find" message
    NotFound,
}

/// Which fallback tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    TooShort,
    VectorRanked,
    VectorRankedNoKeywords,
    KeywordFallback,
    NoMatch,
}

impl Strategy {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::VectorRanked => "vector_ranked",
            Self::VectorRankedNoKeywords => "vector_ranked_no_keywords",
            Self::KeywordFallback => "keyword_fallback",
            Self::NoMatch => "no_match",
        }
    }

    /// Whether the answer came from a similarity match above the threshold.
    pub fn is_confident(&self) -> bool {
        matches!(self, Self::VectorRanked | Self::VectorRankedNoKeywords)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous word window of the normalized document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position in the chunk sequence (0-indexed)
    pub index: usize,

    /// Words joined by single spaces
    pub text: String,

    /// Half-open word range in the source
    pub word_range: (usize, usize),
}

impl Chunk {
    /// Number of words in the chunk.
    pub fn word_count(&self) -> usize {
        self.word_range.1 - self.word_range.0
    }
}

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Answer text
    pub answer: String,

    /// Fallback tier that produced the answer
    pub strategy: Strategy,

    /// Chunks the answer was drawn from, best first
    pub top_chunk_indices: Vec<usize>,

    /// Best similarity score, when ranking ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_score: Option<f64>,
}

impl AnswerResult {
    pub(crate) fn new(answer: String, strategy: Strategy) -> Self {
        Self {
            answer,
            strategy,
            top_chunk_indices: Vec::new(),
            top_score: None,
        }
    }

    pub(crate) fn with_chunks(mut self, indices: Vec<usize>) -> Self {
        self.top_chunk_indices = indices;
        self
    }

    pub(crate) fn with_score(mut self, score: Option<f64>) -> Self {
        self.top_score = score;
        self
    }
}
