//! In-memory [`RecordStore`] implementation for testing and embedding.
//!
//! Records live in a `Vec` behind `std::sync::RwLock`; insertion order is
//! iteration order. IDs are assigned sequentially starting at 1.

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::{ContentKind, ContentRecord, NewRecord};

use super::RecordStore;

struct Inner {
    records: Vec<ContentRecord>,
    next_id: i64,
}

/// In-memory record store.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append a record and return its assigned ID.
    pub fn insert(&self, record: NewRecord) -> Result<i64> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(ContentRecord {
            id,
            title: record.title,
            content: record.content,
            summary: record.summary,
            url: record.url,
            kind: record.kind,
        });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn fetch_all(&self, kind: ContentKind) -> Result<Vec<ContentRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect())
    }
}
