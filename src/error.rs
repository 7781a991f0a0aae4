//! Error types for slipup.

use thiserror::Error;

/// Result type alias using CorpusError.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while loading word data.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("taboo deck is empty, failed to load source data")]
    Empty,

    #[error("malformed {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no categories for language '{0}'")]
    MissingLanguage(String),

    #[error("{0} is not a JSON object")]
    NotAnObject(String),
}
