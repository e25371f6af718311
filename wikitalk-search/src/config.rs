//! Resolver configuration with sensible defaults.
//!
//! [`ResolverConfig`] controls how many candidates are requested, how long
//! excerpts are, the HTTP behaviour, and how many ranked results are kept.
//! It is serde-friendly so that callers can embed it in their own TOML.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Upper bound the MediaWiki API accepts for `gsrlimit` for anonymous clients.
const API_LIMIT_MAX: usize = 50;

/// Configuration for a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of ranked results returned to the caller.
    pub max_results: usize,
    /// Candidate pages requested per full-text search.
    pub search_limit: usize,
    /// Sentences of plain-text intro requested for search excerpts.
    pub extract_sentences: u32,
    /// Thumbnail width in pixels.
    pub thumbnail_size: u32,
    /// Titles requested from the suggestion endpoint in the fallback phase.
    pub suggestion_limit: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent. If `None`, a descriptive `wikitalk/<version>` agent is sent.
    pub user_agent: Option<String>,
    /// Override the Action API endpoint for every language (used by tests
    /// and mirrors). If `None`, `https://<code>.wikipedia.org/w/api.php`.
    pub api_url: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            search_limit: 10,
            extract_sentences: 5,
            thumbnail_size: 400,
            suggestion_limit: 5,
            timeout_seconds: 8,
            user_agent: None,
            api_url: None,
        }
    }
}

impl ResolverConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - every count, size and timeout must be greater than 0
    /// - `max_results` and `search_limit` must not exceed the API cap of 50
    /// - `api_url`, when set, must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.search_limit == 0 {
            return Err(SearchError::Config(
                "search_limit must be greater than 0".into(),
            ));
        }
        if self.max_results > API_LIMIT_MAX || self.search_limit > API_LIMIT_MAX {
            return Err(SearchError::Config(format!(
                "max_results and search_limit must be <= {API_LIMIT_MAX}"
            )));
        }
        if self.extract_sentences == 0 {
            return Err(SearchError::Config(
                "extract_sentences must be greater than 0".into(),
            ));
        }
        if self.thumbnail_size == 0 {
            return Err(SearchError::Config(
                "thumbnail_size must be greater than 0".into(),
            ));
        }
        if self.suggestion_limit == 0 {
            return Err(SearchError::Config(
                "suggestion_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(ref api_url) = self.api_url {
            let parsed = url::Url::parse(api_url)
                .map_err(|e| SearchError::Config(format!("invalid api_url: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(SearchError::Config(
                    "api_url must use http or https".into(),
                ));
            }
        }
        Ok(())
    }
}
