//! Lexical relevance scoring of article titles against a query.
//!
//! Assigns scores based on:
//! - A match tier: exact title (100), title prefix (80) or substring (50)
//! - Word overlap: share of query words (longer than 2 characters) found
//!   in the title, scaled to 40
//!
//! Everything is compared case-insensitively.

use crate::types::{CandidateResult, WikiPage};

/// Score for a title equal to the raw or normalised query.
pub const EXACT_MATCH_SCORE: f64 = 100.0;
/// Score for a title starting with the normalised query.
pub const PREFIX_MATCH_SCORE: f64 = 80.0;
/// Score for a title containing the normalised query.
pub const SUBSTRING_MATCH_SCORE: f64 = 50.0;
/// Weight of the word-overlap fraction.
pub const WORD_OVERLAP_WEIGHT: f64 = 40.0;

/// Query words this short or shorter do not count towards overlap.
const MIN_WORD_CHARS: usize = 2;

/// Calculate the relevance of `title` for a query.
///
/// # Scoring Formula
///
/// ```text
/// score = tier + 40 * (matched_words / words)
/// tier  = 100 if title == raw or title == normalized
///       = 80  if title starts with normalized
///       = 50  if title contains normalized
///       = 0   otherwise
/// ```
///
/// `words` are the whitespace-separated tokens of the normalised query
/// longer than two characters. With no such tokens the overlap term is 0.
pub fn relevance_score(title: &str, raw_query: &str, normalized_query: &str) -> f64 {
    let title = title.to_lowercase();
    let raw = raw_query.to_lowercase();
    let normalized = normalized_query.to_lowercase();

    let tier = if title == raw || title == normalized {
        EXACT_MATCH_SCORE
    } else if title.starts_with(&normalized) {
        PREFIX_MATCH_SCORE
    } else if title.contains(&normalized) {
        SUBSTRING_MATCH_SCORE
    } else {
        0.0
    };

    tier + word_overlap(&title, &normalized) * WORD_OVERLAP_WEIGHT
}

/// Fraction of significant query words that occur in `title`. Both
/// arguments must already be lowercased.
fn word_overlap(title: &str, normalized: &str) -> f64 {
    let words: Vec<&str> = normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_CHARS)
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let matched = words.iter().filter(|w| title.contains(*w)).count();
    matched as f64 / words.len() as f64
}

/// Turn a decoded page into a scored candidate.
pub fn score_page(page: WikiPage, raw_query: &str, normalized_query: &str) -> CandidateResult {
    let score = relevance_score(&page.title, raw_query, normalized_query);
    CandidateResult {
        title: page.title,
        extract: page.extract,
        url: page.url,
        thumbnail: page.thumbnail,
        score,
    }
}

/// Score every page from one request, preserving order.
pub fn score_pages(
    pages: Vec<WikiPage>,
    raw_query: &str,
    normalized_query: &str,
) -> Vec<CandidateResult> {
    pages
        .into_iter()
        .map(|page| score_page(page, raw_query, normalized_query))
        .collect()
}
