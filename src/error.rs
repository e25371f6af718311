//! Error types for the wikitalk assistant.

use wikitalk_search::SearchError;

/// Top-level error type for the chat assistant.
#[derive(Debug, thiserror::Error)]
pub enum WikiTalkError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the resolution pipeline (configuration or client setup).
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// A resolution did not finish within the configured time.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The user sent a blank message.
    #[error("query is empty")]
    EmptyQuery,
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WikiTalkError>;
