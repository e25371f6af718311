//! Response schemas for the MediaWiki Action API.
//!
//! Bodies are decoded into explicit serde structs and then validated into
//! [`WikiPage`] values. A page entry that does not fit the schema is
//! skipped on its own; only a body that does not fit at all is an error.
//! All requests use `formatversion=2`, so `query.pages` is an array and
//! flags such as `missing` are booleans.

use serde::Deserialize;
use url::Url;

use crate::error::SearchError;
use crate::types::{Language, WikiPage};

/// Top-level body of an `action=query` response.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<serde_json::Value>,
}

/// One entry of `query.pages`.
#[derive(Debug, Deserialize)]
struct RawPage {
    title: String,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    fullurl: Option<String>,
    #[serde(default)]
    thumbnail: Option<RawThumbnail>,
    /// Search rank, present only for `generator=search`.
    #[serde(default)]
    index: Option<u32>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
}

#[derive(Debug, Deserialize)]
struct RawThumbnail {
    source: String,
}

/// Decode an `action=query` body into validated pages.
///
/// Pages flagged `missing` or `invalid` are dropped, as are entries that
/// fail to decode or have a blank title. When the API reports a search
/// rank the pages are returned in rank order.
///
/// # Errors
///
/// Returns [`SearchError::Api`] for an API error object and
/// [`SearchError::Parse`] if the body is not a query response.
pub fn parse_query_pages(body: &str, language: Language) -> Result<Vec<WikiPage>, SearchError> {
    let envelope: QueryEnvelope = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid query response: {e}")))?;

    if let Some(error) = envelope.error {
        return Err(SearchError::Api {
            code: error.code,
            info: error.info,
        });
    }

    let Some(query) = envelope.query else {
        return Ok(Vec::new());
    };

    let mut ranked: Vec<(Option<u32>, WikiPage)> = Vec::with_capacity(query.pages.len());
    for value in query.pages {
        let raw: RawPage = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed page entry");
                continue;
            }
        };
        if raw.missing || raw.invalid {
            tracing::trace!(title = %raw.title, "skipping missing page");
            continue;
        }
        let index = raw.index;
        if let Some(page) = validate_page(raw, language) {
            ranked.push((index, page));
        }
    }

    ranked.sort_by_key(|(index, _)| index.unwrap_or(u32::MAX));
    Ok(ranked.into_iter().map(|(_, page)| page).collect())
}

/// Decode an `action=opensearch` body into its list of titles.
///
/// The body is `[term, [titles...], [descriptions...], [urls...]]`; only the
/// titles are used.
///
/// # Errors
///
/// Returns [`SearchError::Api`] for an API error object and
/// [`SearchError::Parse`] if the body does not have that shape.
pub fn parse_opensearch_titles(body: &str) -> Result<Vec<String>, SearchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid opensearch response: {e}")))?;

    if let Some(error) = value.get("error") {
        let error: ApiErrorBody = serde_json::from_value(error.clone())
            .map_err(|e| SearchError::Parse(format!("invalid error object: {e}")))?;
        return Err(SearchError::Api {
            code: error.code,
            info: error.info,
        });
    }

    let titles = value
        .get(1)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| SearchError::Parse("opensearch response has no title list".into()))?;

    Ok(titles
        .iter()
        .filter_map(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}

/// Build the canonical article URL for `title`, e.g.
/// `https://en.wikipedia.org/wiki/Ancient_Rome`.
pub fn canonical_url(title: &str, language: Language) -> String {
    let base = format!("https://{}/wiki/", language.wiki_host());
    let Ok(mut url) = Url::parse(&base) else {
        return base;
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&title.replace(' ', "_"));
    }
    url.to_string()
}

fn validate_page(raw: RawPage, language: Language) -> Option<WikiPage> {
    let title = raw.title.trim().to_string();
    if title.is_empty() {
        tracing::debug!("skipping page with blank title");
        return None;
    }

    let url = raw
        .fullurl
        .as_deref()
        .and_then(web_url)
        .unwrap_or_else(|| canonical_url(&title, language));

    let thumbnail = raw.thumbnail.and_then(|t| web_url(&t.source));

    Some(WikiPage {
        title,
        extract: raw.extract.unwrap_or_default().trim().to_string(),
        url,
        thumbnail,
    })
}

/// Accept absolute or protocol-relative http(s) URLs only.
fn web_url(candidate: &str) -> Option<String> {
    let full = if candidate.starts_with("//") {
        format!("https:{candidate}")
    } else {
        candidate.to_string()
    };
    let parsed = Url::parse(&full).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}
