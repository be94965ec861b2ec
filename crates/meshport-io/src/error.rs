//! Error types for document I/O and tagging passes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for document I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while writing, tagging, or loading a document.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A snapshot violates the document invariants.
    #[error("malformed snapshot: {message}")]
    MalformedSnapshot {
        /// Description of the violated invariant.
        message: String,
    },

    /// Invalid document content (parse error).
    #[error("invalid document content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The tagging pass met an object with no material table entry.
    #[error("object {name:?} has no material table entry")]
    UnknownObject {
        /// The undeclared object name.
        name: String,
    },

    /// The tagging pass met an object bound to zero materials.
    #[error("object {name:?} has no bound materials")]
    NoMaterialSlots {
        /// The object with an empty slot list.
        name: String,
    },

    /// A face line appeared before any object declaration.
    #[error("face line precedes any object declaration")]
    FaceBeforeObject,

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Create a `MalformedSnapshot` error with the given message.
    #[must_use]
    pub fn malformed_snapshot(message: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            message: message.into(),
        }
    }

    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
