//! WikiTalk: ask a question, get the Wikipedia article.
//!
//! This crate is the conversational layer over [`wikitalk_search`]:
//! User question → normalise → concurrent search → rank → reply
//!
//! # Architecture
//!
//! - **Resolution** (`wikitalk-search`): query normalisation, concurrent
//!   MediaWiki search, merge by title, lexical ranking, suggestion fallback
//! - **Assistant**: per-question timeout and blank-input handling
//! - **Reply**: answer text, confidence hedging, related topics, source cards
//! - **Session**: in-memory transcript of one conversation
//! - **Locale**: user-facing strings for English, Bulgarian and Russian

pub mod assistant;
pub mod config;
pub mod error;
pub mod locale;
pub mod reply;
pub mod session;

pub use assistant::Assistant;
pub use config::WikiTalkConfig;
pub use error::{Result, WikiTalkError};
pub use reply::{compose_reply, Confidence, Reply, SourceCard};
pub use session::{ChatSession, Message, Role};
pub use wikitalk_search::{Language, RankedResultSet};
