//! Shared HTTP client for MediaWiki API requests.
//!
//! Wikimedia asks API clients to identify themselves with a descriptive
//! User-Agent, so unlike a scraper this client sends one fixed agent.

use crate::config::ResolverConfig;
use crate::error::SearchError;
use std::time::Duration;

/// User-Agent sent when the config does not provide one.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wikitalk/",
    env!("CARGO_PKG_VERSION"),
    " (Wikipedia chat client)"
);

/// Build a [`reqwest::Client`] configured for the MediaWiki Action API.
///
/// The client has:
/// - Timeout from config
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ResolverConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
