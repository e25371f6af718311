//! MediaWiki Action API backend.
//!
//! [`MediaWikiClient`] implements [`crate::api::WikiApi`] over HTTP;
//! [`response`] holds the JSON schemas it decodes into.

pub mod client;
pub mod response;

pub use client::MediaWikiClient;
