//! Trait definition for the remote Wikipedia backend.
//!
//! The resolver talks to Wikipedia only through [`WikiApi`], so the
//! ranking pipeline can be exercised against an in-memory backend.

use crate::error::SearchError;
use crate::types::{Language, WikiPage};

/// The three remote operations the resolver needs.
///
/// All implementations must be `Send + Sync`: the two primary searches of a
/// resolution run concurrently against the same backend.
pub trait WikiApi: Send + Sync {
    /// Full-text search returning page summaries in search-rank order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails or the response cannot
    /// be decoded.
    fn search(
        &self,
        term: &str,
        language: Language,
    ) -> impl std::future::Future<Output = Result<Vec<WikiPage>, SearchError>> + Send;

    /// Title suggestions for `term` from the main namespace, best first.
    ///
    /// # Errors
    ///
    /// Same as [`WikiApi::search`].
    fn suggest(
        &self,
        term: &str,
        language: Language,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SearchError>> + Send;

    /// Summaries for exactly `titles`, fetched in one batch. Titles that do
    /// not exist are left out of the result.
    ///
    /// # Errors
    ///
    /// Same as [`WikiApi::search`].
    fn fetch_pages(
        &self,
        titles: &[String],
        language: Language,
    ) -> impl std::future::Future<Output = Result<Vec<WikiPage>, SearchError>> + Send;
}
