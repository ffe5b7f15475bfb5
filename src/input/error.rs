//! Errors of the input layer.

use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while reading a single catalog
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file name does not carry a language (e.g. `es.xliff`)
    #[error("File with invalid naming, cannot derive a language: {}", path.display())]
    InvalidFileName {
        /// Path of the offending file
        path: PathBuf,
    },
    /// The XLIFF document could not be traversed
    #[error("Malformed XLIFF for language '{language}': {message}")]
    MalformedXliff {
        /// Language derived from the file name
        language: String,
        /// Reader error, with its byte offset when known
        message: String,
    },
    /// The string catalog is not JSON or does not have the expected shape
    #[error("Malformed string catalog: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

impl ParseError {
    /// Shorthand for [`ParseError::MalformedXliff`].
    pub(crate) fn malformed_xliff(language: &str, message: impl ToString) -> Self {
        Self::MalformedXliff { language: language.to_string(), message: message.to_string() }
    }
}
