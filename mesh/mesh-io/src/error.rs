//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error for the given line.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_content_message() {
        let err = IoError::invalid_content(7, "face index 0 is not allowed");
        assert_eq!(
            err.to_string(),
            "invalid file content at line 7: face index 0 is not allowed"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: IoError = std::io::Error::other("disk on fire").into();
        assert!(matches!(err, IoError::Io(_)));
    }
}
