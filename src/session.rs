//! In-memory chat session: the running transcript of one conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wikitalk_search::Language;

use crate::locale::strings;
use crate::reply::{Reply, SourceCard};

/// Characters of the first user message kept as the session title.
const TITLE_CHARS: usize = 30;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking.
    User,
    /// The assistant answering.
    Assistant,
}

/// One message in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID.
    pub id: Uuid,
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// When the message was added.
    pub timestamp: DateTime<Utc>,
    /// Article links backing an assistant message. Empty for user messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceCard>,
}

/// A conversation with the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session ID.
    pub id: Uuid,
    /// Display title, derived from the first user message.
    pub title: String,
    /// Language the session was started in.
    pub language: Language,
    /// Messages in order.
    pub messages: Vec<Message>,
    /// Time of the most recent change.
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Start an empty session titled with the language's "New Chat" label.
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: strings(language).new_chat.to_string(),
            language,
            messages: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Append a user message. The first one also names the session.
    pub fn push_user(&mut self, content: &str) -> &Message {
        let first = !self.messages.iter().any(|m| m.role == Role::User);
        if first {
            self.title = session_title(content);
        }
        self.push(Role::User, content.to_string(), Vec::new())
    }

    /// Append an assistant reply with its source cards.
    pub fn push_assistant(&mut self, reply: Reply) -> &Message {
        self.push(Role::Assistant, reply.content, reply.sources)
    }

    /// Switch the session language. An untitled session is retitled in
    /// the new language.
    pub fn set_language(&mut self, language: Language) {
        if self.title == strings(self.language).new_chat {
            self.title = strings(language).new_chat.to_string();
        }
        self.language = language;
        self.updated_at = Utc::now();
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn push(&mut self, role: Role, content: String, sources: Vec<SourceCard>) -> &Message {
        let now = Utc::now();
        self.messages.push(Message {
            id: Uuid::new_v4(),
            role,
            content,
            timestamp: now,
            sources,
        });
        self.updated_at = now;
        &self.messages[self.messages.len() - 1]
    }
}

/// First [`TITLE_CHARS`] characters of `content`, with `...` if cut.
fn session_title(content: &str) -> String {
    let content = content.trim();
    let mut title: String = content.chars().take(TITLE_CHARS).collect();
    if content.chars().count() > TITLE_CHARS {
        title.push_str("...");
    }
    title
}
