//! Query normalisation: strip question punctuation and one leading filler
//! phrase so that the search targets the subject of the question.
//!
//! "Who is Marie Curie?" becomes "marie curie". Only the first matching
//! filler (in table order) is removed; inputs without a filler come back
//! verbatim.

use crate::types::Language;

const EN_FILLERS: &[&str] = &[
    "who is",
    "who was",
    "what is",
    "what was",
    "tell me about",
    "where is",
    "how about",
    "the",
    "a",
    "an",
];

const BG_FILLERS: &[&str] = &[
    "кой е",
    "коя е",
    "какво е",
    "кои са",
    "кажи ми за",
    "къде е",
    "кой беше",
    "кои бяха",
];

const RU_FILLERS: &[&str] = &[
    "кто такой",
    "кто такая",
    "что такое",
    "расскажи о",
    "где находится",
    "кто был",
    "что это",
];

/// Punctuation removed before filler matching, including full-width forms.
const STRIPPED_PUNCTUATION: &[char] = &['?', '？', '!', '！'];

/// Ordered filler phrases for `language`. Order is significant: the first
/// phrase that prefixes the query wins.
pub fn filler_phrases(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_FILLERS,
        Language::Bg => BG_FILLERS,
        Language::Ru => RU_FILLERS,
    }
}

/// Reduce `query` to its core subject.
///
/// Lowercases, removes `?`/`!` (and full-width variants), trims, then strips
/// the first filler phrase from [`filler_phrases`] that is followed by a
/// space. Returns `query` unchanged if no filler matched or nothing is left.
pub fn normalize(query: &str, language: Language) -> String {
    let lowered = query.to_lowercase().replace(STRIPPED_PUNCTUATION, "");
    let cleaned = lowered.trim();

    let stripped = filler_phrases(language).iter().find_map(|filler| {
        cleaned
            .strip_prefix(*filler)
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim)
    });

    match stripped {
        Some(subject) if !subject.is_empty() => subject.to_string(),
        _ => query.to_string(),
    }
}
