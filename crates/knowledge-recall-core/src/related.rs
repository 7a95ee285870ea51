//! Related-content strategies.
//!
//! A [`RelatedContent`] implementation answers "which records relate to
//! this one?" for the retrieval service. Strategies are swappable; the
//! caller contract is fixed:
//!
//! - the result is a ranked sequence of at most `limit` items,
//! - an unknown target or an unrelated corpus yields an empty sequence,
//!   never an error,
//! - store failures propagate unchanged.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ContentKind, SearchResult};
use crate::rank;
use crate::store::RecordStore;

/// Result count used when the caller does not supply a related-content limit.
pub const DEFAULT_RELATED_LIMIT: i64 = 5;

/// Strategy for finding records related to a given record.
#[async_trait]
pub trait RelatedContent: Send + Sync {
    /// Short identifier used in configuration (e.g. `"none"`, `"title"`).
    fn name(&self) -> &str;

    /// Return records related to `content_id`, best first, at most `limit`.
    async fn related(
        &self,
        store: &dyn RecordStore,
        content_id: i64,
        kind: ContentKind,
        limit: i64,
    ) -> Result<Vec<SearchResult>>;
}

/// The default strategy: nothing is ever related.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelated;

#[async_trait]
impl RelatedContent for NoRelated {
    fn name(&self) -> &str {
        "none"
    }

    async fn related(
        &self,
        _store: &dyn RecordStore,
        _content_id: i64,
        _kind: ContentKind,
        _limit: i64,
    ) -> Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }
}

/// Ranks the other records of the same kind against the target's title.
///
/// Uses the query ranker unchanged, so a record sharing the target's full
/// title scores on its own title, content, and summary signals. The target
/// is never returned as related to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleRelated;

#[async_trait]
impl RelatedContent for TitleRelated {
    fn name(&self) -> &str {
        "title"
    }

    async fn related(
        &self,
        store: &dyn RecordStore,
        content_id: i64,
        kind: ContentKind,
        limit: i64,
    ) -> Result<Vec<SearchResult>> {
        let records = store.fetch_all(kind).await?;

        let target_title = match records.iter().find(|r| r.id == content_id) {
            Some(target) => target.title.clone(),
            None => return Ok(Vec::new()),
        };

        let others: Vec<_> = records.into_iter().filter(|r| r.id != content_id).collect();
        Ok(rank::rank_all(&others, &target_title, limit))
    }
}

/// Build a strategy from its configuration name.
pub fn strategy_from_name(name: &str) -> Result<Box<dyn RelatedContent>> {
    match name {
        "none" => Ok(Box::new(NoRelated)),
        "title" => Ok(Box::new(TitleRelated)),
        other => anyhow::bail!(
            "Unknown related-content strategy: '{}'. Use none or title.",
            other
        ),
    }
}
