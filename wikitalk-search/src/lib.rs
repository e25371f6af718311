//! # wikitalk-search
//!
//! Turns a free-text question into a ranked list of Wikipedia articles.
//!
//! ## Design
//!
//! - Strips question phrasing ("who is", "кой е", "что такое", ...) per language
//! - Searches the normalised and the raw query concurrently and merges by title
//! - Ranks by lexical title relevance (exact, prefix, substring, word overlap)
//! - Falls back to title suggestions when full-text search finds nothing
//! - Graceful degradation: a failed request counts as zero candidates, so the
//!   worst outcome is an empty result set
//!
//! ## Privacy
//!
//! - Queries are logged only at trace level
//! - No state is kept between resolutions

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mediawiki;
pub mod normalize;
pub mod orchestrator;
pub mod types;

pub use api::WikiApi;
pub use config::ResolverConfig;
pub use error::{Result, SearchError};
pub use mediawiki::MediaWikiClient;
pub use normalize::normalize;
pub use orchestrator::merge::merge_candidates;
pub use orchestrator::resolve::Resolver;
pub use orchestrator::scoring::relevance_score;
pub use types::{CandidateResult, Language, RankedResultSet, WikiPage};

/// Resolve a query against Wikipedia in `language`.
///
/// Normalises the query, searches concurrently, merges, ranks, and falls
/// back to suggestions if needed. Returns up to `config.max_results`
/// articles; an empty set means nothing was found.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Network and
/// decoding failures are not errors here: they degrade to fewer results.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wikitalk_search::Result<()> {
/// use wikitalk_search::{Language, ResolverConfig};
///
/// let config = ResolverConfig::default();
/// let results = wikitalk_search::resolve("Who is Marie Curie?", Language::En, &config).await?;
/// for result in &results {
///     println!("{} ({:.0}): {}", result.title, result.score, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve(
    query: &str,
    language: Language,
    config: &ResolverConfig,
) -> Result<RankedResultSet> {
    let resolver = Resolver::new(config.clone())?;
    Ok(resolver.resolve(query, language).await)
}

/// Resolve a query with the default configuration.
///
/// Convenience wrapper around [`resolve`] using [`ResolverConfig::default()`].
///
/// # Errors
///
/// Same as [`resolve`].
pub async fn resolve_default(query: &str, language: Language) -> Result<RankedResultSet> {
    resolve(query, language, &ResolverConfig::default()).await
}
