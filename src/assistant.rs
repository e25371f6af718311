//! The assistant: resolve a question and compose the reply.
//!
//! Owns a [`Resolver`] and applies the caller-side policy the resolver does
//! not: blank-input rejection, an overall timeout per question, and the
//! confidence threshold used when phrasing the answer.

use std::time::Duration;

use wikitalk_search::{Language, MediaWikiClient, RankedResultSet, Resolver, WikiApi};

use crate::config::WikiTalkConfig;
use crate::error::{Result, WikiTalkError};
use crate::reply::{compose_reply, Reply};

/// Answers questions from Wikipedia.
#[derive(Debug, Clone)]
pub struct Assistant<A = MediaWikiClient> {
    resolver: Resolver<A>,
    config: WikiTalkConfig,
}

impl Assistant<MediaWikiClient> {
    /// Create an assistant backed by the live MediaWiki API.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the HTTP client cannot be built.
    pub fn new(config: WikiTalkConfig) -> Result<Self> {
        config.validate()?;
        let resolver = Resolver::new(config.resolver.clone())?;
        Ok(Self { resolver, config })
    }
}

impl<A: WikiApi> Assistant<A> {
    /// Create an assistant over an existing resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_resolver(resolver: Resolver<A>, config: WikiTalkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { resolver, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &WikiTalkConfig {
        &self.config
    }

    /// Default language for [`Assistant::ask`].
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Switch the default language.
    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    /// Answer `query` in the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`WikiTalkError::EmptyQuery`] for blank input and
    /// [`WikiTalkError::Timeout`] if resolution exceeds the configured time.
    /// Finding nothing is not an error: the reply says so.
    pub async fn ask(&self, query: &str) -> Result<Reply> {
        self.ask_in(query, self.config.language).await
    }

    /// Answer `query` in `language`.
    ///
    /// # Errors
    ///
    /// Same as [`Assistant::ask`].
    pub async fn ask_in(&self, query: &str, language: Language) -> Result<Reply> {
        let results = self.lookup(query, language).await?;
        Ok(compose_reply(
            query.trim(),
            language,
            &results,
            self.config.low_confidence_threshold,
            self.config.related_topics,
        ))
    }

    /// Resolve `query` without composing a reply.
    ///
    /// # Errors
    ///
    /// Same as [`Assistant::ask`].
    pub async fn lookup(&self, query: &str, language: Language) -> Result<RankedResultSet> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WikiTalkError::EmptyQuery);
        }

        let limit = Duration::from_secs(self.config.request_timeout_seconds);
        let results = tokio::time::timeout(limit, self.resolver.resolve(query, language))
            .await
            .map_err(|_| {
                tracing::warn!(%language, seconds = limit.as_secs(), "resolution timed out");
                WikiTalkError::Timeout(format!("no answer after {}s", limit.as_secs()))
            })?;

        tracing::info!(%language, results = results.len(), "lookup finished");
        Ok(results)
    }
}
