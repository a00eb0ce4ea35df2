//! Term-vector spaces and similarity.
//!
//! Ranking only depends on the [`Vectorizer`] trait: build one weighted
//! space over a set of items, compare rows by cosine. The builtin
//! implementation is [`TfIdfVectorizer`].

mod tfidf;

pub use tfidf::TfIdfVectorizer;

use thiserror::Error;

/// Failures building a term-vector space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// Nothing to vectorize
    #[error("no items to vectorize")]
    NoItems,

    /// Every token was filtered out (e.g. only stop words)
    #[error("empty vocabulary after filtering")]
    EmptyVocabulary,

    /// Implementation-specific failure
    #[error("vectorization failed: {0}")]
    Failed(String),
}

/// A sparse row of term weights, entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(term index, weight)` pairs. Zero weights are dropped.
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, weight)| *weight != 0.0);
        entries.sort_by_key(|(index, _)| *index);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_weight) = self.entries[i];
            let (b_index, b_weight) = other.entries[j];
            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Scale to unit length. Zero vectors stay zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}

/// One weighted term space: a vocabulary and a row per input item.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseVector>,
}

impl TermMatrix {
    pub fn new(vocabulary: Vec<String>, rows: Vec<SparseVector>) -> Self {
        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Capability for building term-vector spaces.
pub trait Vectorizer: Send + Sync + std::fmt::Debug {
    /// Implementation name (e.g., "tfidf")
    fn name(&self) -> &str;

    /// Build one space holding a row for every item, in input order.
    fn vectorize(&self, items: &[&str]) -> Result<TermMatrix, VectorizeError>;

    /// Similarity of two rows from the same space, in [0, 1].
    fn cosine(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        cosine(a, b)
    }
}

/// Cosine similarity clamped to [0, 1]; 0 when either vector is zero.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(0.0, 1.0)
}
