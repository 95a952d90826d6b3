//! Error types for rapid_lexrank
//!
//! Every error is scoped to a single document: callers summarizing a batch
//! record the failure for that document and move on.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors that can occur while summarizing a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizerError {
    /// The input contained no sentence-worthy content
    #[error("document contains no usable sentence content")]
    EmptyDocument,

    /// No sentence reached the ranker
    #[error("no sentences available to rank")]
    DegenerateGraph,

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A serialized configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// A dedicated worker pool could not be created
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl SummarizerError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizerError::InvalidConfig(message.into())
    }

    /// Whether this error was caused by the document content rather than by
    /// the caller's configuration
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            SummarizerError::EmptyDocument | SummarizerError::DegenerateGraph
        )
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        SummarizerError::ConfigParse(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for SummarizerError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SummarizerError::ThreadPool(err.to_string())
    }
}
