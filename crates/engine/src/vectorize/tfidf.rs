//! TF-IDF term weighting over unigrams and bigrams.

use super::{SparseVector, TermMatrix, VectorizeError, Vectorizer};
use crate::language::language;
use crate::types::AnswerConfig;
use std::collections::{BTreeMap, HashMap};
use unicode_segmentation::UnicodeSegmentation;

/// Minimum characters for a token to enter the vocabulary.
const MIN_TOKEN_CHARS: usize = 2;

/// Below this many items the document-frequency ceiling degenerates to
/// "present in every item" and would erase a one-chunk document's only signal.
const MIN_ITEMS_FOR_DF_CEILING: usize = 20;

/// TF-IDF vectorizer.
///
/// Weight of a term in an item is its raw count times the smoothed inverse
/// item frequency `ln((1 + n) / (1 + df)) + 1`; rows are L2-normalized.
/// Deterministic: the vocabulary is ordered alphabetically and ties in the
/// feature cap are broken alphabetically.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    max_features: usize,
    max_df: f64,
}

impl TfIdfVectorizer {
    pub fn new(max_features: usize, max_df: f64) -> Self {
        Self {
            max_features,
            max_df,
        }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.max_features, config.max_df)
    }

    /// Split text into unigram and bigram terms.
    ///
    /// Tokens are lowercase alphanumeric runs of two or more characters that
    /// are not stop words; bigrams join adjacent surviving tokens.
    fn analyze(&self, text: &str) -> Vec<String> {
        let language = language();
        let lower = text.to_lowercase();

        let tokens: Vec<&str> = lower
            .unicode_words()
            .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| !language.is_some_and(|l| l.is_stop_word(token)))
            .collect();

        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
        terms
    }

    /// Pick the vocabulary: drop over-common terms, cap by corpus count.
    fn select_vocabulary(
        &self,
        counts: &[HashMap<String, usize>],
    ) -> Vec<String> {
        let n = counts.len();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_count: BTreeMap<&str, usize> = BTreeMap::new();

        for item in counts {
            for (term, count) in item {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
                *corpus_count.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let ceiling = if n >= MIN_ITEMS_FOR_DF_CEILING {
            self.max_df * n as f64
        } else {
            f64::INFINITY
        };

        let mut candidates: Vec<(&str, usize)> = corpus_count
            .into_iter()
            .filter(|(term, _)| document_frequency[term] as f64 <= ceiling)
            .collect();

        // BTreeMap order is alphabetical, and the sort is stable
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        candidates.truncate(self.max_features);

        let mut vocabulary: Vec<String> = candidates
            .into_iter()
            .map(|(term, _)| term.to_string())
            .collect();
        vocabulary.sort();
        vocabulary
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn name(&self) -> &str {
        "tfidf"
    }

    fn vectorize(&self, items: &[&str]) -> Result<TermMatrix, VectorizeError> {
        if items.is_empty() {
            return Err(VectorizeError::NoItems);
        }

        let counts: Vec<HashMap<String, usize>> = items
            .iter()
            .map(|item| {
                let mut counts = HashMap::new();
                for term in self.analyze(item) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let vocabulary = self.select_vocabulary(&counts);
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let n = items.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (i, term) in vocabulary.iter().enumerate() {
            let df = counts.iter().filter(|item| item.contains_key(term)).count() as f64;
            idf[i] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let rows: Vec<SparseVector> = counts
            .iter()
            .map(|item| {
                let entries = item
                    .iter()
                    .filter_map(|(term, count)| {
                        index
                            .get(term.as_str())
                            .map(|&i| (i, *count as f64 * idf[i]))
                    })
                    .collect();
                SparseVector::new(entries).normalized()
            })
            .collect();

        tracing::debug!(
            "Vectorized {} items into {} terms",
            items.len(),
            vocabulary.len()
        );

        Ok(TermMatrix::new(vocabulary, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::cosine;

    #[test]
    fn test_analyze_unigrams_and_bigrams() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        let terms = vectorizer.analyze("At what temperature does water boil?");

        assert_eq!(
            terms,
            vec![
                "temperature",
                "water",
                "boil",
                "temperature water",
                "water boil"
            ]
        );
    }

    #[test]
    fn test_rows_in_input_order_and_normalized() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        let matrix = vectorizer
            .vectorize(&["rust ownership rules", "garbage collected runtime", "rust borrow checker"])
            .unwrap();

        assert_eq!(matrix.len(), 3);
        for row in matrix.rows() {
            assert!((row.norm() - 1.0).abs() < 1e-9);
        }

        let rows = matrix.rows();
        assert!(cosine(&rows[0], &rows[2]) > 0.0);
        assert_eq!(cosine(&rows[0], &rows[1]), 0.0);
    }

    #[test]
    fn test_shared_term_in_two_items_kept() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        let matrix = vectorizer
            .vectorize(&["water boils at sea level", "when does water boil"])
            .unwrap();

        assert!(matrix.vocabulary().contains(&"water".to_string()));
        assert!(cosine(&matrix.rows()[0], &matrix.rows()[1]) > 0.0);
    }

    #[test]
    fn test_ubiquitous_terms_dropped_in_large_spaces() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        let items: Vec<String> = (0..25).map(|i| format!("common token{}", i)).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();

        let matrix = vectorizer.vectorize(&refs).unwrap();
        assert!(!matrix.vocabulary().contains(&"common".to_string()));
        assert!(matrix.vocabulary().contains(&"token7".to_string()));
    }

    #[test]
    fn test_max_features_cap() {
        let vectorizer = TfIdfVectorizer::new(3, 0.95);
        let matrix = vectorizer
            .vectorize(&["alpha alpha alpha beta beta gamma delta", "epsilon"])
            .unwrap();

        // Corpus counts: alpha 3, then "alpha alpha" and beta tied at 2
        assert_eq!(matrix.vocabulary(), &["alpha", "alpha alpha", "beta"]);
    }

    #[test]
    fn test_stop_words_only_is_empty_vocabulary() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        let result = vectorizer.vectorize(&["the and of it", "what is this"]);
        assert_eq!(result.unwrap_err(), VectorizeError::EmptyVocabulary);
    }

    #[test]
    fn test_no_items() {
        let vectorizer = TfIdfVectorizer::new(200, 0.95);
        assert_eq!(vectorizer.vectorize(&[]).unwrap_err(), VectorizeError::NoItems);
    }
}
