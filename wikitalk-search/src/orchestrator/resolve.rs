//! Core resolver: normalise, concurrent search, merge, score, rank, fallback.
//!
//! Queries the backend with the normalised and the raw query at once,
//! merges the two candidate lists by title, and ranks them by lexical
//! relevance. If that finds nothing, a suggestion lookup followed by a
//! batched detail fetch is tried instead. Fetch failures never escape:
//! each is logged and counts as zero candidates.

use crate::api::WikiApi;
use crate::config::ResolverConfig;
use crate::error::SearchError;
use crate::mediawiki::MediaWikiClient;
use crate::normalize::normalize;
use crate::types::{CandidateResult, Language, RankedResultSet};

use super::merge::merge_candidates;
use super::scoring::score_pages;

/// Resolves free-text queries to ranked Wikipedia articles.
///
/// Holds no per-query state; one resolver can serve any number of
/// concurrent resolutions.
#[derive(Debug, Clone)]
pub struct Resolver<A = MediaWikiClient> {
    api: A,
    max_results: usize,
}

impl Resolver<MediaWikiClient> {
    /// Create a resolver backed by the MediaWiki HTTP API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, SearchError> {
        let max_results = config.max_results;
        let api = MediaWikiClient::new(config)?;
        Ok(Self { api, max_results })
    }
}

impl<A: WikiApi> Resolver<A> {
    /// Create a resolver over any [`WikiApi`] backend.
    pub fn with_api(api: A, max_results: usize) -> Self {
        Self { api, max_results }
    }

    /// The backend this resolver queries.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolve `query` in `language` to at most `max_results` ranked articles.
    ///
    /// # Pipeline
    ///
    /// 1. Normalise the query
    /// 2. Search the normalised query and, if it differs, the raw query,
    ///    concurrently with [`futures::future::join`]
    /// 3. Score every page against both query forms
    /// 4. Merge by title (highest score wins, ties keep the normalised result)
    /// 5. If nothing was found, fall back to suggestion + detail lookup
    /// 6. Sort by score (descending) and truncate
    ///
    /// An empty set means no article was found.
    pub async fn resolve(&self, query: &str, language: Language) -> RankedResultSet {
        if query.trim().is_empty() {
            tracing::debug!(%language, "blank query, nothing to resolve");
            return RankedResultSet::empty();
        }

        let normalized = normalize(query, language);
        tracing::trace!(query, normalized = %normalized, %language, "resolving");

        let mut candidates = self.primary_phase(query, &normalized, language).await;

        if candidates.is_empty() {
            tracing::debug!(%language, "primary search found nothing, trying suggestions");
            candidates = self.fallback_phase(query, &normalized, language).await;
        }

        let ranked = RankedResultSet::from_candidates(candidates, self.max_results);
        tracing::debug!(count = ranked.len(), %language, "resolution complete");
        ranked
    }

    /// Concurrent full-text searches for the normalised and raw query,
    /// merged by title.
    async fn primary_phase(
        &self,
        query: &str,
        normalized: &str,
        language: Language,
    ) -> Vec<CandidateResult> {
        let normalized_search = self.search_candidates(normalized, query, normalized, language);
        let raw_search = async {
            if normalized != query {
                self.search_candidates(query, query, normalized, language).await
            } else {
                Vec::new()
            }
        };

        let (from_normalized, from_raw) = futures::future::join(normalized_search, raw_search).await;
        merge_candidates(from_normalized, from_raw)
    }

    /// One full-text search, scored. Failures are logged and yield nothing.
    async fn search_candidates(
        &self,
        term: &str,
        query: &str,
        normalized: &str,
        language: Language,
    ) -> Vec<CandidateResult> {
        match self.api.search(term, language).await {
            Ok(pages) => score_pages(pages, query, normalized),
            Err(err) => {
                tracing::warn!(%language, error = %err, "search request failed");
                Vec::new()
            }
        }
    }

    /// Suggestion titles for the normalised query, then one batched detail
    /// fetch for exactly those titles.
    async fn fallback_phase(
        &self,
        query: &str,
        normalized: &str,
        language: Language,
    ) -> Vec<CandidateResult> {
        let titles = match self.api.suggest(normalized, language).await {
            Ok(titles) => titles,
            Err(err) => {
                tracing::warn!(%language, error = %err, "suggestion request failed");
                return Vec::new();
            }
        };
        if titles.is_empty() {
            tracing::debug!(%language, "no suggestions");
            return Vec::new();
        }

        match self.api.fetch_pages(&titles, language).await {
            Ok(pages) => score_pages(pages, query, normalized),
            Err(err) => {
                tracing::warn!(%language, error = %err, "detail request failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WikiPage;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory backend keyed by search term, recording every call.
    #[derive(Default)]
    struct MockApi {
        search: HashMap<String, Result<Vec<WikiPage>, String>>,
        suggest: HashMap<String, Result<Vec<String>, String>>,
        details: Vec<WikiPage>,
        fail_details: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn with_search(mut self, term: &str, titles: &[&str]) -> Self {
            self.search
                .insert(term.to_string(), Ok(titles.iter().map(|t| page(t)).collect()));
            self
        }

        fn with_failing_search(mut self, term: &str) -> Self {
            self.search
                .insert(term.to_string(), Err("connection reset".into()));
            self
        }

        fn with_suggestions(mut self, term: &str, titles: &[&str]) -> Self {
            self.suggest.insert(
                term.to_string(),
                Ok(titles.iter().map(|t| t.to_string()).collect()),
            );
            self
        }

        fn with_failing_suggestions(mut self, term: &str) -> Self {
            self.suggest
                .insert(term.to_string(), Err("timeout".into()));
            self
        }

        fn with_details(mut self, titles: &[&str]) -> Self {
            self.details = titles.iter().map(|t| page(t)).collect();
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("lock").clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().expect("lock").push(call);
        }
    }

    impl WikiApi for MockApi {
        async fn search(&self, term: &str, _language: Language) -> Result<Vec<WikiPage>, SearchError> {
            self.record(format!("search:{term}"));
            match self.search.get(term) {
                Some(Ok(pages)) => Ok(pages.clone()),
                Some(Err(e)) => Err(SearchError::Http(e.clone())),
                None => Ok(Vec::new()),
            }
        }

        async fn suggest(&self, term: &str, _language: Language) -> Result<Vec<String>, SearchError> {
            self.record(format!("suggest:{term}"));
            match self.suggest.get(term) {
                Some(Ok(titles)) => Ok(titles.clone()),
                Some(Err(e)) => Err(SearchError::Http(e.clone())),
                None => Ok(Vec::new()),
            }
        }

        async fn fetch_pages(
            &self,
            titles: &[String],
            _language: Language,
        ) -> Result<Vec<WikiPage>, SearchError> {
            self.record(format!("details:{}", titles.join("|")));
            if self.fail_details {
                return Err(SearchError::Parse("bad body".into()));
            }
            Ok(self
                .details
                .iter()
                .filter(|p| titles.contains(&p.title))
                .cloned()
                .collect())
        }
    }

    fn page(title: &str) -> WikiPage {
        WikiPage {
            title: title.to_string(),
            extract: format!("{title} is an article."),
            url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
            thumbnail: None,
        }
    }

    fn resolver(api: MockApi) -> Resolver<MockApi> {
        Resolver::with_api(api, 5)
    }

    #[tokio::test]
    async fn exact_title_ranks_first() {
        let api = MockApi::default().with_search(
            "Ancient Rome",
            &["Roman Empire", "History of Rome", "Ancient Rome"],
        );
        let r = resolver(api);
        let results = r.resolve("Ancient Rome", Language::En).await;
        let top = results.top().expect("has results");
        assert_eq!(top.title, "Ancient Rome");
        assert!(top.score >= 100.0);
    }

    #[tokio::test]
    async fn raw_search_skipped_when_query_already_clean() {
        let api = MockApi::default().with_search("Ancient Rome", &["Ancient Rome"]);
        let r = resolver(api);
        r.resolve("Ancient Rome", Language::En).await;
        assert_eq!(r.api().calls(), vec!["search:Ancient Rome"]);
    }

    #[tokio::test]
    async fn both_forms_searched_when_normalisation_changes_query() {
        let api = MockApi::default()
            .with_search("marie curie", &["Marie Curie"])
            .with_search("Who is Marie Curie?", &["Marie Curie", "Pierre Curie"]);
        let r = resolver(api);
        let results = r.resolve("Who is Marie Curie?", Language::En).await;

        let mut calls = r.api().calls();
        calls.sort();
        assert_eq!(
            calls,
            vec!["search:Who is Marie Curie?", "search:marie curie"]
        );
        assert_eq!(results.titles(), vec!["Marie Curie", "Pierre Curie"]);
    }

    #[tokio::test]
    async fn duplicate_titles_collapse() {
        let api = MockApi::default()
            .with_search("rome", &["Rome", "Roma"])
            .with_search("What is Rome?", &["Rome"]);
        let results = resolver(api).resolve("What is Rome?", Language::En).await;
        assert_eq!(results.titles().iter().filter(|t| **t == "Rome").count(), 1);
    }

    #[tokio::test]
    async fn failed_raw_search_still_uses_normalised_results() {
        let api = MockApi::default()
            .with_search("marie curie", &["Marie Curie"])
            .with_failing_search("Who is Marie Curie?");
        let results = resolver(api).resolve("Who is Marie Curie?", Language::En).await;
        assert_eq!(results.titles(), vec!["Marie Curie"]);
    }

    #[tokio::test]
    async fn never_more_than_five_results() {
        let titles: Vec<String> = (0..10).map(|i| format!("Rome {i}")).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let api = MockApi::default()
            .with_search("rome", &title_refs)
            .with_search("What is Rome", &["Rome A", "Rome B", "Rome C"]);
        let results = resolver(api).resolve("What is Rome", Language::En).await;
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn fallback_used_when_primary_finds_nothing() {
        let api = MockApi::default()
            .with_suggestions("Rme", &["Rome", "Rme (disambiguation)"])
            .with_details(&["Rome"]);
        let r = resolver(api);
        let results = r.resolve("Rme", Language::En).await;

        assert_eq!(results.titles(), vec!["Rome"]);
        assert_eq!(
            r.api().calls(),
            vec![
                "search:Rme",
                "suggest:Rme",
                "details:Rome|Rme (disambiguation)"
            ]
        );
    }

    #[tokio::test]
    async fn fallback_not_used_when_primary_finds_something() {
        let api = MockApi::default()
            .with_search("Rome", &["Rome"])
            .with_suggestions("Rome", &["Roma"]);
        let r = resolver(api);
        r.resolve("Rome", Language::En).await;
        assert!(r.api().calls().iter().all(|c| c.starts_with("search:")));
    }

    #[tokio::test]
    async fn fallback_uses_normalised_query() {
        let api = MockApi::default().with_suggestions("rme", &["Rome"]).with_details(&["Rome"]);
        let r = resolver(api);
        let results = r.resolve("What is Rme?", Language::En).await;
        assert_eq!(results.titles(), vec!["Rome"]);
        assert!(r.api().calls().contains(&"suggest:rme".to_string()));
    }

    #[tokio::test]
    async fn fallback_results_are_ranked_and_capped() {
        let titles = ["Zeta", "Rome Statute", "Rome", "Romeo", "Roma", "Rome (band)", "Ro"];
        let api = MockApi::default()
            .with_suggestions("rome", &titles)
            .with_details(&titles);
        let results = resolver(api).resolve("rome", Language::En).await;
        assert_eq!(results.len(), 5);
        assert_eq!(results.top().map(|r| r.title.as_str()), Some("Rome"));
        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn no_suggestions_yields_empty_set() {
        let api = MockApi::default();
        let r = resolver(api);
        let results = r.resolve("xyznonexistentarticle12345", Language::En).await;
        assert!(results.is_empty());
        assert_eq!(
            r.api().calls(),
            vec!["search:xyznonexistentarticle12345", "suggest:xyznonexistentarticle12345"]
        );
    }

    #[tokio::test]
    async fn suggestion_failure_yields_empty_set() {
        let api = MockApi::default().with_failing_suggestions("Rome");
        let results = resolver(api).resolve("Rome", Language::En).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn detail_failure_yields_empty_set() {
        let mut api = MockApi::default().with_suggestions("Rome", &["Rome"]);
        api.fail_details = true;
        let results = resolver(api).resolve("Rome", Language::En).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn all_failures_yield_empty_set() {
        let api = MockApi::default()
            .with_failing_search("marie curie")
            .with_failing_search("Who is Marie Curie?")
            .with_failing_suggestions("marie curie");
        let results = resolver(api).resolve("Who is Marie Curie?", Language::En).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn blank_query_makes_no_requests() {
        let r = resolver(MockApi::default());
        let results = r.resolve("   ", Language::En).await;
        assert!(results.is_empty());
        assert!(r.api().calls().is_empty());
    }

    #[tokio::test]
    async fn equal_score_duplicate_keeps_normalised_result() {
        let mut api = MockApi::default();
        let mut from_normalized = page("Rome");
        from_normalized.extract = "normalised".into();
        let mut from_raw = page("Rome");
        from_raw.extract = "raw".into();
        api.search.insert("rome".into(), Ok(vec![from_normalized]));
        api.search.insert("What is Rome".into(), Ok(vec![from_raw]));

        let results = resolver(api).resolve("What is Rome", Language::En).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results.top().map(|r| r.extract.as_str()), Some("normalised"));
    }

    #[test]
    fn resolver_new_rejects_invalid_config() {
        let result = Resolver::new(ResolverConfig {
            timeout_seconds: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
