//! Resolution pipeline: concurrent search, merge by title, lexical scoring,
//! ranking, and the suggestion fallback.

pub mod merge;
pub mod resolve;
pub mod scoring;
