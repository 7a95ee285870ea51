//! Related-content lookups for a stored record.
//!
//! Which records count as related is decided by the strategy named in
//! `retrieval.related_strategy`. The default, `none`, always answers with
//! an empty list.

use anyhow::Result;
use tracing::debug;

use knowledge_recall_core::models::{ContentKind, SearchResult};

use crate::config::Config;
use crate::search::{open_service, print_results};

/// Core related-content function returning structured results.
///
/// `limit` falls back to `retrieval.related_limit` from the config.
pub async fn related_records(
    config: &Config,
    content_id: i64,
    kind: ContentKind,
    limit: Option<i64>,
) -> Result<Vec<SearchResult>> {
    let service = open_service(config).await?;

    let results = service
        .related_content(
            content_id,
            kind,
            Some(limit.unwrap_or(config.retrieval.related_limit)),
        )
        .await;
    service.store().pool().close().await;

    let results = results?;
    debug!(
        content_id,
        %kind,
        strategy = service.related_strategy(),
        results = results.len(),
        "related lookup complete"
    );
    Ok(results)
}

/// CLI entry point for `recall related <id>`.
pub async fn run_related(
    config: &Config,
    content_id: i64,
    kind: ContentKind,
    limit: Option<i64>,
    json: bool,
) -> Result<()> {
    let results = related_records(config, content_id, kind, limit).await?;
    print_results(&results, json)
}
