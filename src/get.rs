//! Record retrieval by ID.
//!
//! Unlike search results, `recall get` prints the full stored content
//! rather than the 500-character preview.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::db;
use crate::sqlite_store::{SqliteStore, StoredRecord};

/// Retrieves a stored record by its ID.
pub async fn get_record(config: &Config, id: i64) -> Result<StoredRecord> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());

    let result = store.get_stored(id).await?;
    pool.close().await;

    match result {
        Some(record) => Ok(record),
        None => bail!("record not found: {}", id),
    }
}

/// CLI entry point for `recall get <id>`.
pub async fn run_get(config: &Config, id: i64, json: bool) -> Result<()> {
    let stored = get_record(config, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stored)?);
        return Ok(());
    }

    let record = &stored.record;
    println!("--- Record ---");
    println!("id:          {}", record.id);
    println!("kind:        {}", record.kind);
    println!("title:       {}", record.title);
    println!("url:         {}", record.url);
    println!("captured_at: {}", stored.captured_at);
    if let Some(ref summary) = record.summary {
        println!("summary:     {}", summary);
    }
    println!();

    println!("--- Content ---");
    println!("{}", record.content);

    Ok(())
}
