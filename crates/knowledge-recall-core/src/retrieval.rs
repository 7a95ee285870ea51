//! Retrieval service: the entry point hosts call.
//!
//! [`RetrievalService`] owns a [`RecordStore`] and a [`RelatedContent`]
//! strategy. A search performs exactly one read against the store, hands
//! the snapshot to the ranker, and returns the ranked list unchanged.
//! Store errors are returned as-is; nothing is retried or logged here.

use anyhow::Result;

use crate::models::{ContentKind, SearchResult};
use crate::rank::{self, DEFAULT_SEARCH_LIMIT};
use crate::related::{NoRelated, RelatedContent, DEFAULT_RELATED_LIMIT};
use crate::store::RecordStore;

/// Bundles all inputs for a single search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    /// Free-text query; matched case-insensitively as a substring.
    pub query: &'a str,
    /// Maximum results; [`DEFAULT_SEARCH_LIMIT`] when `None`.
    pub limit: Option<i64>,
    /// If true, populate the per-signal explanation on each result.
    pub explain: bool,
}

impl<'a> SearchRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            limit: None,
            explain: false,
        }
    }
}

/// Run a search against any [`RecordStore`].
///
/// Only pages are candidates; video records are not fetched.
pub async fn search<S: RecordStore + ?Sized>(
    store: &S,
    req: &SearchRequest<'_>,
) -> Result<Vec<SearchResult>> {
    let records = store.fetch_all(ContentKind::Page).await?;
    Ok(rank::rank_all_with(
        &records,
        req.query,
        req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        req.explain,
    ))
}

/// Search and related-content lookups over one store.
pub struct RetrievalService<S> {
    store: S,
    related: Box<dyn RelatedContent>,
}

impl<S: RecordStore> RetrievalService<S> {
    /// Create a service using the empty [`NoRelated`] strategy.
    pub fn new(store: S) -> Self {
        Self::with_related(store, Box::new(NoRelated))
    }

    pub fn with_related(store: S, related: Box<dyn RelatedContent>) -> Self {
        Self { store, related }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn related_strategy(&self) -> &str {
        self.related.name()
    }

    /// Rank stored pages against `query`, returning at most `limit` results
    /// (default [`DEFAULT_SEARCH_LIMIT`]).
    pub async fn search(&self, query: &str, limit: Option<i64>) -> Result<Vec<SearchResult>> {
        self.search_request(&SearchRequest {
            query,
            limit,
            explain: false,
        })
        .await
    }

    pub async fn search_request(&self, req: &SearchRequest<'_>) -> Result<Vec<SearchResult>> {
        search(&self.store, req).await
    }

    /// Records related to `content_id`, at most `limit` (default
    /// [`DEFAULT_RELATED_LIMIT`]).
    ///
    /// The limit is enforced here as well, so a strategy that over-returns
    /// cannot break the caller contract.
    pub async fn related_content(
        &self,
        content_id: i64,
        kind: ContentKind,
        limit: Option<i64>,
    ) -> Result<Vec<SearchResult>> {
        let limit = limit.unwrap_or(DEFAULT_RELATED_LIMIT);
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let mut results = self
            .related
            .related(&self.store, content_id, kind, limit)
            .await?;
        results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(results)
    }
}
