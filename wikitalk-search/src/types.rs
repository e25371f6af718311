//! Core types: supported languages, decoded pages, scored candidates and
//! the ranked result set handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::orchestrator::merge::merge_candidates;

/// A Wikipedia language edition that queries can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English Wikipedia.
    #[default]
    En,
    /// Bulgarian Wikipedia.
    Bg,
    /// Russian Wikipedia.
    Ru,
}

impl Language {
    /// Returns the ISO 639-1 code, which is also the Wikipedia subdomain.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bg => "bg",
            Self::Ru => "ru",
        }
    }

    /// Returns the native display name of this language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Bg => "Български",
            Self::Ru => "Русский",
        }
    }

    /// Returns the Wikipedia host serving this language, e.g. `en.wikipedia.org`.
    pub fn wiki_host(&self) -> String {
        format!("{}.wikipedia.org", self.code())
    }

    /// Returns the Action API endpoint for this language edition.
    pub fn api_endpoint(&self) -> String {
        format!("https://{}/w/api.php", self.wiki_host())
    }

    /// Returns all supported languages.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Bg, Self::Ru]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "bg" => Ok(Self::Bg),
            "ru" => Ok(Self::Ru),
            other => Err(SearchError::Config(format!(
                "unsupported language code: {other}"
            ))),
        }
    }
}

/// A page summary decoded and validated at the network boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Canonical article title.
    pub title: String,
    /// Plain-text intro excerpt. Empty when the API returned none.
    pub extract: String,
    /// Canonical article URL.
    pub url: String,
    /// Thumbnail image URL, if the article has one.
    pub thumbnail: Option<String>,
}

/// A page scored against the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Article title. Unique within one resolution.
    pub title: String,
    /// Plain-text intro excerpt.
    pub extract: String,
    /// Canonical article URL.
    pub url: String,
    /// Thumbnail image URL, if any.
    pub thumbnail: Option<String>,
    /// Lexical relevance score (higher is better, at most 140).
    pub score: f64,
}

/// Ranked, deduplicated results of one resolution.
///
/// Entries are sorted by descending score and titles are unique. The set
/// is never longer than the cap it was built with. Non-empty sets come
/// only from [`RankedResultSet::from_candidates`]; the type is serialize-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResultSet {
    results: Vec<CandidateResult>,
}

impl RankedResultSet {
    /// An empty result set, meaning "no article found".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rank `candidates`: collapse duplicate titles (highest score wins,
    /// ties keep the earlier entry), stable-sort by descending score, and
    /// keep at most `cap` entries.
    pub fn from_candidates(candidates: Vec<CandidateResult>, cap: usize) -> Self {
        let mut results = merge_candidates(candidates, Vec::new());
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(cap);
        Self { results }
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no article was found.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The best match, if any.
    pub fn top(&self) -> Option<&CandidateResult> {
        self.results.first()
    }

    /// Iterate over results in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateResult> {
        self.results.iter()
    }

    /// Titles in rank order.
    pub fn titles(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.title.as_str()).collect()
    }

    /// Consume the set, returning the ranked results.
    pub fn into_vec(self) -> Vec<CandidateResult> {
        self.results
    }
}

impl IntoIterator for RankedResultSet {
    type Item = CandidateResult;
    type IntoIter = std::vec::IntoIter<CandidateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedResultSet {
    type Item = &'a CandidateResult;
    type IntoIter = std::slice::Iter<'a, CandidateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
