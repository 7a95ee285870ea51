//! Record store abstraction for Knowledge Recall.
//!
//! The [`RecordStore`] trait is the only path by which the retrieval
//! service reaches stored content. It is read-only: capture and ingestion
//! write through backend-specific APIs that live outside this trait.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ContentKind, ContentRecord};

/// Read-only view of a key-indexed content record store.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`fetch_all`](RecordStore::fetch_all) | All records of one kind, in store order |
/// | [`get_record`](RecordStore::get_record) | One record by ID and kind |
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return every record of `kind` in the store's iteration order.
    ///
    /// That order is the tie-break order for equal search scores, so
    /// backends must keep it stable between calls on an unchanged store.
    async fn fetch_all(&self, kind: ContentKind) -> Result<Vec<ContentRecord>>;

    /// Look up a single record.
    ///
    /// The default implementation scans [`fetch_all`](RecordStore::fetch_all);
    /// keyed backends should override it.
    async fn get_record(&self, id: i64, kind: ContentKind) -> Result<Option<ContentRecord>> {
        let records = self.fetch_all(kind).await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }
}
