//! Ranked search over captured pages.
//!
//! The ranking algorithm lives in `knowledge-recall-core`; this module
//! opens the SQLite store, builds the [`RetrievalService`], and formats
//! results for the CLI.

use anyhow::Result;
use tracing::debug;

pub use knowledge_recall_core::models::SearchResult;
use knowledge_recall_core::related;
use knowledge_recall_core::retrieval::{RetrievalService, SearchRequest};

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Connect to the configured database and wrap it in a [`RetrievalService`]
/// using the configured related-content strategy.
pub async fn open_service(config: &Config) -> Result<RetrievalService<SqliteStore>> {
    let strategy = related::strategy_from_name(&config.retrieval.related_strategy)?;
    let pool = db::connect(config).await?;
    Ok(RetrievalService::with_related(
        SqliteStore::new(pool),
        strategy,
    ))
}

/// Core search function returning structured results.
///
/// `limit` falls back to `retrieval.default_limit` from the config.
pub async fn search_records(
    config: &Config,
    query: &str,
    limit: Option<i64>,
    explain: bool,
) -> Result<Vec<SearchResult>> {
    let service = open_service(config).await?;

    let req = SearchRequest {
        query,
        limit: Some(limit.unwrap_or(config.retrieval.default_limit)),
        explain,
    };
    let results = service.search_request(&req).await;
    service.store().pool().close().await;

    let results = results?;
    debug!(query, results = results.len(), "search complete");
    Ok(results)
}

/// CLI entry point: calls [`search_records`] and prints results to stdout.
pub async fn run_search(
    config: &Config,
    query: &str,
    limit: Option<i64>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let results = search_records(config, query, limit, explain).await?;
    print_results(&results, json)
}

/// Print a ranked list either as pretty JSON or as numbered text entries.
pub fn print_results(results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, result.score, result.title);
        if let Some(ref ex) = result.explain {
            println!(
                "    signals: title={}  content={}  summary={}",
                yes_no(ex.title_match),
                yes_no(ex.content_match),
                yes_no(ex.summary_match)
            );
        }
        println!("    kind: {}", result.kind);
        println!("    url: {}", result.url);
        println!(
            "    excerpt: \"{}\"",
            excerpt(&result.content).replace('\n', " ").trim()
        );
        println!("    id: {}", result.id);
        println!();
    }

    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// First 160 characters of a preview, for one-line terminal output.
fn excerpt(content: &str) -> String {
    const EXCERPT_CHARS: usize = 160;
    let mut out: String = content.chars().take(EXCERPT_CHARS).collect();
    if content.chars().nth(EXCERPT_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
