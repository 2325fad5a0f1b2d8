//! Error types for the word list core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// `update_word` was called for a term that is not in the list
    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for WordListError {
    fn from(err: serde_json::Error) -> Self {
        WordListError::Config(err.to_string())
    }
}

/// Convenience type alias for Results with WordListError
pub type Result<T> = std::result::Result<T, WordListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordListError::NotFound("класс".to_string());
        assert_eq!(err.to_string(), "entry not found: класс");

        let err = WordListError::Config("remove class is empty".to_string());
        assert_eq!(err.to_string(), "invalid configuration: remove class is empty");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WordListError = json_err.into();
        assert!(matches!(err, WordListError::Config(_)));
    }
}
