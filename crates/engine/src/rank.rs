//! Similarity ranking of chunks against a question.

use crate::types::Chunk;
use crate::vectorize::{VectorizeError, Vectorizer};

/// Per-chunk similarity scores and the best chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Cosine score per chunk, in chunk order
    pub scores: Vec<f64>,

    /// Up to K chunk indices by descending score, ties by earlier index
    pub top: Vec<usize>,
}

impl Ranking {
    /// Score of the best chunk, if any.
    pub fn best_score(&self) -> Option<f64> {
        self.top.first().map(|&i| self.scores[i])
    }

    /// Whether the best chunk clears an inclusive threshold.
    pub fn is_match(&self, threshold: f64) -> bool {
        self.best_score().is_some_and(|score| score >= threshold)
    }
}

/// Score every chunk against the question in one shared term space.
///
/// The question is vectorized as the last item alongside the chunks, so all
/// scores come from the same space.
pub fn rank_chunks(
    vectorizer: &dyn Vectorizer,
    chunks: &[Chunk],
    question: &str,
    top_k: usize,
) -> Result<Ranking, VectorizeError> {
    if chunks.is_empty() {
        return Err(VectorizeError::NoItems);
    }

    let mut items: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    items.push(question);

    let matrix = vectorizer.vectorize(&items)?;
    if matrix.len() != items.len() {
        return Err(VectorizeError::Failed(format!(
            "{} returned {} rows for {} items",
            vectorizer.name(),
            matrix.len(),
            items.len()
        )));
    }

    let (question_row, chunk_rows) = matrix
        .rows()
        .split_last()
        .ok_or(VectorizeError::NoItems)?;

    let scores: Vec<f64> = chunk_rows
        .iter()
        .map(|row| vectorizer.cosine(row, question_row))
        .collect();

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps earlier chunks first on equal scores
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(top_k);

    tracing::debug!(
        "Ranked {} chunks with {} (top: {:?}, best score: {:.4})",
        scores.len(),
        vectorizer.name(),
        order,
        order.first().map(|&i| scores[i]).unwrap_or(0.0)
    );

    Ok(Ranking { scores, top: order })
}
