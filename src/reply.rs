//! Turning a ranked result set into a chat reply.
//!
//! The top article becomes the answer body, the next few titles are listed
//! as related topics, and every result becomes a source card. An empty set
//! produces a "not found" message with a direct Wikipedia search link.

use serde::{Deserialize, Serialize};
use url::Url;
use wikitalk_search::{CandidateResult, Language, RankedResultSet};

use crate::locale::strings;

/// How sure the assistant is about its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The top result scored at or above the threshold.
    High,
    /// The top result scored below the threshold; the answer is hedged.
    Low,
    /// No article was found.
    NotFound,
}

/// A link to one article shown under a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCard {
    /// Article title.
    pub title: String,
    /// Article URL.
    pub url: String,
    /// Thumbnail image URL, if any.
    pub thumbnail: Option<String>,
}

impl From<&CandidateResult> for SourceCard {
    fn from(result: &CandidateResult) -> Self {
        Self {
            title: result.title.clone(),
            url: result.url.clone(),
            thumbnail: result.thumbnail.clone(),
        }
    }
}

/// A composed assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Markdown-flavoured reply text.
    pub content: String,
    /// One card per result, in rank order.
    pub sources: Vec<SourceCard>,
    /// Confidence in the top result.
    pub confidence: Confidence,
}

/// Compose the reply for `query` from its ranked `results`.
///
/// `threshold` is the score below which the answer is hedged and
/// `related` the maximum number of runner-up titles listed.
pub fn compose_reply(
    query: &str,
    language: Language,
    results: &RankedResultSet,
    threshold: f64,
    related: usize,
) -> Reply {
    let text = strings(language);
    let sources: Vec<SourceCard> = results.iter().map(SourceCard::from).collect();

    let Some(top) = results.top() else {
        let content = format!(
            "{}\n\n[{}]({})",
            text.not_found.replace("{query}", query),
            text.search_directly,
            search_url(query, language),
        );
        return Reply {
            content,
            sources,
            confidence: Confidence::NotFound,
        };
    };

    let article = format!("### {}\n{}", top.title, top.extract);
    let (mut content, confidence) = if top.score < threshold {
        (format!("{}\n\n{article}", text.low_confidence), Confidence::Low)
    } else {
        (article, Confidence::High)
    };

    let others: Vec<&str> = results
        .iter()
        .skip(1)
        .take(related)
        .map(|r| r.title.as_str())
        .collect();
    if !others.is_empty() {
        content.push_str(&format!(
            "\n\n---\n\n**{}:** {}",
            text.related_topics,
            others.join(", ")
        ));
    }

    Reply {
        content,
        sources,
        confidence,
    }
}

/// Wikipedia's own search page for `query`, used when nothing was found.
pub fn search_url(query: &str, language: Language) -> String {
    let base = format!("https://{}/w/index.php", language.wiki_host());
    match Url::parse_with_params(&base, &[("search", query)]) {
        Ok(url) => url.to_string(),
        Err(_) => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, score: f64) -> CandidateResult {
        CandidateResult {
            title: title.into(),
            extract: format!("{title} is an article."),
            url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
            thumbnail: None,
            score,
        }
    }

    fn ranked(items: &[(&str, f64)]) -> RankedResultSet {
        RankedResultSet::from_candidates(
            items.iter().map(|(t, s)| candidate(t, *s)).collect(),
            5,
        )
    }

    #[test]
    fn confident_answer_shows_top_article() {
        let results = ranked(&[("Ancient Rome", 140.0)]);
        let reply = compose_reply("Ancient Rome", Language::En, &results, 30.0, 3);
        assert_eq!(reply.confidence, Confidence::High);
        assert_eq!(reply.content, "### Ancient Rome\nAncient Rome is an article.");
        assert_eq!(reply.sources.len(), 1);
        assert_eq!(reply.sources[0].url, "https://en.wikipedia.org/wiki/Ancient_Rome");
    }

    #[test]
    fn low_score_is_hedged() {
        let results = ranked(&[("Banana", 20.0)]);
        let reply = compose_reply("fruit thing", Language::En, &results, 30.0, 3);
        assert_eq!(reply.confidence, Confidence::Low);
        assert!(reply.content.starts_with("I found some potential matches"));
        assert!(reply.content.contains("\n\n### Banana\n"));
    }

    #[test]
    fn threshold_is_exclusive() {
        let results = ranked(&[("Edge", 30.0)]);
        let reply = compose_reply("edge", Language::En, &results, 30.0, 3);
        assert_eq!(reply.confidence, Confidence::High);
    }

    #[test]
    fn related_topics_list_next_three() {
        let results = ranked(&[
            ("Rome", 140.0),
            ("Roma", 90.0),
            ("Rome Statute", 80.0),
            ("Romeo", 70.0),
            ("Romania", 10.0),
        ]);
        let reply = compose_reply("Rome", Language::En, &results, 30.0, 3);
        assert!(reply
            .content
            .ends_with("\n\n---\n\n**Related topics:** Roma, Rome Statute, Romeo"));
        assert_eq!(reply.sources.len(), 5);
    }

    #[test]
    fn related_section_omitted_for_single_result() {
        let results = ranked(&[("Rome", 140.0)]);
        let reply = compose_reply("Rome", Language::En, &results, 30.0, 3);
        assert!(!reply.content.contains("---"));
    }

    #[test]
    fn related_labels_are_localised() {
        let results = ranked(&[("Пушкин", 140.0), ("Пушкино", 120.0)]);
        let reply = compose_reply("Пушкин", Language::Ru, &results, 30.0, 3);
        assert!(reply.content.contains("**Связанные темы:** Пушкино"));
    }

    #[test]
    fn not_found_links_to_wikipedia_search() {
        let reply = compose_reply(
            "xyznonexistentarticle12345",
            Language::En,
            &RankedResultSet::empty(),
            30.0,
            3,
        );
        assert_eq!(reply.confidence, Confidence::NotFound);
        assert!(reply.sources.is_empty());
        assert!(reply
            .content
            .starts_with("I couldn't find any specific Wikipedia articles for \"xyznonexistentarticle12345\"."));
        assert!(reply.content.contains(
            "[Search directly on Wikipedia](https://en.wikipedia.org/w/index.php?search=xyznonexistentarticle12345)"
        ));
    }

    #[test]
    fn not_found_in_bulgarian() {
        let reply = compose_reply("нещо", Language::Bg, &RankedResultSet::empty(), 30.0, 3);
        assert!(reply.content.starts_with("Не можах да открия статии в Wikipedia"));
        assert!(reply.content.contains("https://bg.wikipedia.org/w/index.php?search="));
    }

    #[test]
    fn search_url_encodes_query() {
        let url = search_url("Marie Curie & Co", Language::En);
        assert_eq!(
            url,
            "https://en.wikipedia.org/w/index.php?search=Marie+Curie+%26+Co"
        );
    }

    #[test]
    fn reply_serializes_confidence_in_snake_case() {
        let reply = compose_reply("x", Language::En, &RankedResultSet::empty(), 30.0, 3);
        let json = serde_json::to_value(&reply).expect("serialize");
        assert_eq!(json["confidence"], "not_found");
    }
}
