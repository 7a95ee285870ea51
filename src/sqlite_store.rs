//! SQLite-backed [`RecordStore`] implementation.
//!
//! Reads go through the [`RecordStore`] trait; the insert path used by
//! `recall import` is an inherent method, since the retrieval core never
//! writes.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use knowledge_recall_core::models::{ContentKind, ContentRecord, NewRecord};
use knowledge_recall_core::store::RecordStore;

/// A stored record together with its capture timestamp.
///
/// Returned by `recall get`; the retrieval core works on the plain
/// [`ContentRecord`].
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    #[serde(flatten)]
    pub record: ContentRecord,
    /// Capture time (ISO 8601).
    pub captured_at: String,
}

/// SQLite implementation of the [`RecordStore`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a record and return its assigned ID.
    pub async fn insert_record(&self, record: &NewRecord) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO records (kind, title, content, summary, url, captured_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.kind.as_str())
        .bind(&record.title)
        .bind(&record.content)
        .bind(&record.summary)
        .bind(&record.url)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch a record by ID regardless of kind, with its capture time.
    pub async fn get_stored(&self, id: i64) -> Result<Option<StoredRecord>> {
        let row = sqlx::query(
            "SELECT id, kind, title, content, summary, url, captured_at FROM records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let captured_at: i64 = row.get("captured_at");
                Ok(Some(StoredRecord {
                    record: record_from_row(&row)?,
                    captured_at: format_ts_iso(captured_at),
                }))
            }
            None => Ok(None),
        }
    }
}

fn record_from_row(row: &SqliteRow) -> Result<ContentRecord> {
    let kind: String = row.get("kind");
    Ok(ContentRecord {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        summary: row.get("summary"),
        url: row.get("url"),
        kind: kind.parse()?,
    })
}

/// Format a Unix timestamp as ISO 8601.
pub fn format_ts_iso(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn fetch_all(&self, kind: ContentKind) -> Result<Vec<ContentRecord>> {
        let rows = sqlx::query(
            "SELECT id, kind, title, content, summary, url FROM records WHERE kind = ? ORDER BY id ASC",
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn get_record(&self, id: i64, kind: ContentKind) -> Result<Option<ContentRecord>> {
        let row = sqlx::query(
            "SELECT id, kind, title, content, summary, url FROM records WHERE id = ? AND kind = ?",
        )
        .bind(id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(record_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ts_iso() {
        assert_eq!(format_ts_iso(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_ts_iso(1_700_000_000), "2023-11-14T22:13:20Z");
    }
}
