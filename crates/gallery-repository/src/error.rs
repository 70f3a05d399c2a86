//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Identifier is not a well-formed id
    #[error("Invalid prompt ID: {id}")]
    InvalidId { id: String },

    /// No entry with this id
    #[error("No prompt or prompt component found with id: {id}")]
    NotFound { id: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Library file could not be (de)serialized
    #[error("Failed to parse library file: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Filter could not be compiled
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RepositoryError::InvalidId {
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid prompt ID: abc");

        let err = RepositoryError::NotFound {
            id: "abc".to_string(),
        };
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RepositoryError = io.into();
        assert!(matches!(err, RepositoryError::Io(_)));
    }
}
