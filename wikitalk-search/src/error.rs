//! Error types for the wikitalk-search crate.
//!
//! Errors only exist at the network boundary and in configuration. The
//! resolver itself never surfaces them: a failed fetch is logged and
//! counted as zero candidates.

/// Errors that can occur while talking to the MediaWiki API.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be decoded into the expected schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API answered with an error object.
    #[error("API error {code}: {info}")]
    Api {
        /// Machine-readable MediaWiki error code.
        code: String,
        /// Human-readable description from the server.
        info: String,
    },

    /// Invalid resolver configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for wikitalk-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
