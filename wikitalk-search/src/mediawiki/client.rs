//! HTTP implementation of [`WikiApi`] against the MediaWiki Action API.
//!
//! One client serves all three language editions; the endpoint is chosen
//! per request from the [`Language`] (or the configured override).

use crate::api::WikiApi;
use crate::config::ResolverConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{Language, WikiPage};

use super::response::{parse_opensearch_titles, parse_query_pages};

type Params = Vec<(&'static str, String)>;

/// MediaWiki Action API client.
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl MediaWikiClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the config is invalid or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// The Action API endpoint used for `language`.
    pub fn endpoint(&self, language: Language) -> String {
        self.config
            .api_url
            .clone()
            .unwrap_or_else(|| language.api_endpoint())
    }

    /// Parameters shared by the search and detail requests: plain-text
    /// intro extract, canonical URL and thumbnail for each page.
    fn page_detail_params(&self) -> Params {
        vec![
            ("action", "query".into()),
            ("format", "json".into()),
            ("formatversion", "2".into()),
            ("prop", "extracts|info|pageimages".into()),
            ("exintro", "1".into()),
            ("explaintext", "1".into()),
            ("exlimit", "max".into()),
            ("inprop", "url".into()),
            ("piprop", "thumbnail".into()),
            ("pithumbsize", self.config.thumbnail_size.to_string()),
            ("redirects", "1".into()),
        ]
    }

    fn search_params(&self, term: &str) -> Params {
        let mut params = self.page_detail_params();
        params.extend([
            ("generator", "search".into()),
            ("gsrsearch", term.to_string()),
            ("gsrlimit", self.config.search_limit.to_string()),
            ("gsrnamespace", "0".into()),
            ("exsentences", self.config.extract_sentences.to_string()),
        ]);
        params
    }

    fn suggest_params(&self, term: &str) -> Params {
        vec![
            ("action", "opensearch".into()),
            ("format", "json".into()),
            ("search", term.to_string()),
            ("limit", self.config.suggestion_limit.to_string()),
            ("namespace", "0".into()),
        ]
    }

    fn detail_params(&self, titles: &[String]) -> Params {
        let mut params = self.page_detail_params();
        params.push(("titles", titles.join("|")));
        params
    }

    /// GET the endpoint with `params` and return the body text.
    async fn get(&self, language: Language, params: &Params) -> Result<String, SearchError> {
        let endpoint = self.endpoint(language);
        let response = self
            .client
            .get(&endpoint)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("MediaWiki request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("MediaWiki HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("MediaWiki response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), %language, "MediaWiki response received");
        Ok(body)
    }
}

impl WikiApi for MediaWikiClient {
    async fn search(&self, term: &str, language: Language) -> Result<Vec<WikiPage>, SearchError> {
        tracing::trace!(term, %language, "MediaWiki full-text search");
        let body = self.get(language, &self.search_params(term)).await?;
        let pages = parse_query_pages(&body, language)?;
        tracing::debug!(count = pages.len(), %language, "search pages parsed");
        Ok(pages)
    }

    async fn suggest(&self, term: &str, language: Language) -> Result<Vec<String>, SearchError> {
        tracing::trace!(term, %language, "MediaWiki opensearch");
        let body = self.get(language, &self.suggest_params(term)).await?;
        let titles = parse_opensearch_titles(&body)?;
        tracing::debug!(count = titles.len(), %language, "suggestions parsed");
        Ok(titles)
    }

    async fn fetch_pages(
        &self,
        titles: &[String],
        language: Language,
    ) -> Result<Vec<WikiPage>, SearchError> {
        if titles.is_empty() {
            return Ok(Vec::new());
        }
        tracing::trace!(?titles, %language, "MediaWiki detail batch");
        let body = self.get(language, &self.detail_params(titles)).await?;
        let pages = parse_query_pages(&body, language)?;
        tracing::debug!(
            requested = titles.len(),
            found = pages.len(),
            %language,
            "detail pages parsed"
        );
        Ok(pages)
    }
}
