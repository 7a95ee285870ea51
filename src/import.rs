//! Load records from a JSON file into the local store.
//!
//! The file holds a JSON array of objects:
//!
//! ```json
//! [
//!   {"title": "Neural Networks", "content": "...", "url": "https://...",
//!    "summary": "intro to neural nets", "kind": "page"}
//! ]
//! ```
//!
//! `summary` is optional and `kind` defaults to `page`. Entries with a
//! blank title are skipped, since every stored record needs one.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use knowledge_recall_core::models::NewRecord;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub inserted: usize,
    pub skipped: usize,
    /// IDs assigned to the inserted records, in file order.
    pub ids: Vec<i64>,
}

/// Parse an import file's contents.
pub fn parse_records(json: &str) -> Result<Vec<NewRecord>> {
    serde_json::from_str(json).with_context(|| "Failed to parse import file as a JSON array of records")
}

/// Insert `records` into `store`, skipping entries with a blank title.
pub async fn import_into(store: &SqliteStore, records: &[NewRecord]) -> Result<ImportStats> {
    let mut stats = ImportStats::default();

    for (i, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            warn!(index = i, url = %record.url, "skipping record with empty title");
            stats.skipped += 1;
            continue;
        }
        let id = store.insert_record(record).await?;
        stats.ids.push(id);
        stats.inserted += 1;
    }

    Ok(stats)
}

/// Read `path` and import its records into the configured database.
pub async fn import_file(config: &Config, path: &Path) -> Result<ImportStats> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;
    let records = parse_records(&content)?;

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let stats = import_into(&store, &records).await;
    pool.close().await;

    stats
}

/// CLI entry point for `recall import <file>`.
pub async fn run_import(config: &Config, path: &Path) -> Result<()> {
    let stats = import_file(config, path).await?;
    info!(
        inserted = stats.inserted,
        skipped = stats.skipped,
        "import complete"
    );
    println!("imported records: {}", stats.inserted);
    println!("skipped records: {}", stats.skipped);
    Ok(())
}
