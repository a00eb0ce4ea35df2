//! Extractive question answering over a single document.
//!
//! Text is normalized, split into overlapping word windows, ranked against
//! the question with TF-IDF cosine similarity, and the answer is built from
//! the sentences of the best windows. Every answer names the strategy that
//! produced it, so callers can tell a confident answer from a fallback.

pub mod answer;
pub mod chunker;
pub mod config;
pub mod keywords;
pub mod language;
pub mod normalize;
pub mod rank;
pub mod sentences;
pub mod types;
pub mod vectorize;


// Re-export commonly used types
pub use answer::{answer, answer_with, chunk_document, TOO_SHORT_MESSAGE};
pub use chunker::chunk_words;
pub use keywords::extract_keywords;
pub use language::{init_language, Language, StopWordSource};
pub use normalize::normalize_text;
pub use types::{AnswerConfig, AnswerResult, Chunk, LowConfidencePolicy, Strategy};
pub use vectorize::{TfIdfVectorizer, VectorizeError, Vectorizer};
