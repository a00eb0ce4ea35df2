//! Error types for docquest.
//!
//! This module defines a unified error enum covering the failures that may
//! cross a crate boundary: configuration, caller preconditions, document
//! input, and serialization.

use thiserror::Error;

/// Unified error type for docquest.
///
/// Only precondition violations and I/O reach the caller. Ranking faults
/// inside the engine are absorbed by its fallback chain and never show up
/// here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (invalid tuning parameters, bad files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The question was empty or only whitespace
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document input errors (unreadable or binary text)
    #[error("Document error: {0}")]
    Document(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::Config("overlap must be smaller than chunk_size".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: overlap must be smaller than chunk_size"
        );
        assert_eq!(AppError::EmptyQuestion.to_string(), "Question must not be empty");
    }

    #[test]
    fn test_every_variant_has_a_category() {
        let errors = vec![
            AppError::Config("bad".to_string()),
            AppError::EmptyQuestion,
            AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            AppError::Document("binary".to_string()),
            AppError::Serialization("eof".to_string()),
        ];

        for err in &errors {
            let category = match err {
                AppError::Config(_) => "Configuration error",
                AppError::EmptyQuestion => "Question",
                AppError::Io(_) => "I/O error",
                AppError::Document(_) => "Document error",
                AppError::Serialization(_) => "Serialization error",
            };
            assert!(err.to_string().starts_with(category));
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let parsed: Result<Vec<u32>, _> = serde_yaml::from_str("not: [a list");
        let err: AppError = parsed.unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
