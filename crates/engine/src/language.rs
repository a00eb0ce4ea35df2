//! Process-wide language resources.
//!
//! The stop-word list is loaded once, on the first explicit
//! [`init_language`] call or on first use, and never changes afterwards. A
//! failed load is remembered as "unavailable" and every consumer degrades to
//! unfiltered tokenization instead of failing.

use docquest_core::{AppError, AppResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LANGUAGE: OnceLock<Option<Language>> = OnceLock::new();

/// English stop words.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Where the stop-word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopWordSource {
    /// The compiled-in English list
    Builtin,
    /// One word per line; `#` starts a comment
    File(PathBuf),
}

/// Stop-word lookup for one language.
#[derive(Debug, Clone)]
pub struct Language {
    stop_words: HashSet<String>,
}

impl Language {
    /// The compiled-in English resources.
    pub fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a stop-word list from a file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let stop_words: HashSet<String> = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        let language = Self { stop_words };
        if language.is_empty() {
            return Err(AppError::Config(format!(
                "Stop-word file {:?} contains no words",
                path
            )));
        }

        Ok(language)
    }

    /// Check a lowercase token against the stop-word list.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Initialize the process-wide language resources.
///
/// Only the first call (or first use) has an effect; later calls return the
/// state established then. Returns whether resources are available.
pub fn init_language(source: StopWordSource) -> bool {
    LANGUAGE
        .get_or_init(|| match source {
            StopWordSource::Builtin => Some(Language::english()),
            StopWordSource::File(path) => match Language::from_file(&path) {
                Ok(language) => {
                    tracing::debug!("Loaded {} stop words from {:?}", language.len(), path);
                    Some(language)
                }
                Err(e) => {
                    tracing::warn!(
                        "Language resources unavailable, using naive tokenization: {}",
                        e
                    );
                    None
                }
            },
        })
        .is_some()
}

/// The process-wide language resources, if available.
pub fn language() -> Option<&'static Language> {
    LANGUAGE.get_or_init(|| Some(Language::english())).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_english_stop_words() {
        let language = Language::english();
        assert!(language.is_stop_word("the"));
        assert!(language.is_stop_word("what"));
        assert!(language.is_stop_word("does"));
        assert!(!language.is_stop_word("water"));
        assert!(!language.is_empty());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stop.txt");
        std::fs::write(&path, "# custom list\nFoo\nbar  # trailing comment\n\n").unwrap();

        let language = Language::from_file(&path).unwrap();
        assert_eq!(language.len(), 2);
        assert!(language.is_stop_word("foo"));
        assert!(language.is_stop_word("bar"));
    }

    #[test]
    fn test_from_file_missing_or_empty() {
        let temp = TempDir::new().unwrap();
        assert!(Language::from_file(&temp.path().join("missing.txt")).is_err());

        let path = temp.path().join("empty.txt");
        std::fs::write(&path, "# nothing here\n").unwrap();
        assert!(Language::from_file(&path).is_err());
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init_language(StopWordSource::Builtin);
        let second = init_language(StopWordSource::File(PathBuf::from("/nonexistent")));

        assert_eq!(first, second);
        assert_eq!(language().is_some(), first);
    }
}
