//! User-facing strings for each supported language.

use wikitalk_search::Language;

/// Every phrase the assistant shows, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    /// Title of a chat before the first message.
    pub new_chat: &'static str,
    /// Prompt shown when waiting for input.
    pub prompt: &'static str,
    /// Status line while a lookup is in flight.
    pub thinking: &'static str,
    /// Greeting printed when a chat starts.
    pub welcome: &'static str,
    /// Second greeting line.
    pub welcome_sub: &'static str,
    /// Heading above the list of source links.
    pub sources_heading: &'static str,
    /// Sentence placed before a low-confidence answer.
    pub low_confidence: &'static str,
    /// Label before the list of runner-up titles.
    pub related_topics: &'static str,
    /// "Nothing found" sentence; `{query}` is replaced by the user's query.
    pub not_found: &'static str,
    /// Text of the direct Wikipedia search link.
    pub search_directly: &'static str,
}

const EN: Strings = Strings {
    new_chat: "New Chat",
    prompt: "Ask Wikipedia anything...",
    thinking: "Searching Wikipedia...",
    welcome: "How can I help you today?",
    welcome_sub: "I use Wikipedia to provide accurate information.",
    sources_heading: "Verified Wikipedia Results",
    low_confidence: "I found some potential matches, but I'm not entirely sure. Here is the most relevant one:",
    related_topics: "Related topics",
    not_found: "I couldn't find any specific Wikipedia articles for \"{query}\".",
    search_directly: "Search directly on Wikipedia",
};

const BG: Strings = Strings {
    new_chat: "Нов чат",
    prompt: "Попитай Wikipedia за всичко...",
    thinking: "Търся в Wikipedia...",
    welcome: "Как мога да ви помогна днес?",
    welcome_sub: "Използвам Wikipedia, за да предоставя точна информация.",
    sources_heading: "Проверени резултати от Wikipedia",
    low_confidence: "Открих няколко възможни съвпадения, но не съм напълно сигурен. Ето най-подходящото:",
    related_topics: "Свързани теми",
    not_found: "Не можах да открия статии в Wikipedia за \"{query}\".",
    search_directly: "Потърсете директно в Wikipedia",
};

const RU: Strings = Strings {
    new_chat: "Новый чат",
    prompt: "Спроси Wikipedia о чем угодно...",
    thinking: "Ищу в Wikipedia...",
    welcome: "Чем я могу вам помочь сегодня?",
    welcome_sub: "Я использую Wikipedia для предоставления точной информации.",
    sources_heading: "Проверенные результаты Wikipedia",
    low_confidence: "Я нашел несколько потенциальных совпадений, но не совсем уверен. Вот наиболее подходящее:",
    related_topics: "Связанные темы",
    not_found: "Я не смог найти статей в Wikipedia по запросу \"{query}\".",
    search_directly: "Искать напрямую в Wikipedia",
};

/// Strings for `language`.
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Bg => &BG,
        Language::Ru => &RU,
    }
}
