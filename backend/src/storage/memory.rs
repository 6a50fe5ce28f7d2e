//! In-memory record storage.
//!
//! Records live in a `Vec` behind a `tokio::sync::RwLock` and are lost on
//! restart. IDs come from a per-store counter starting at 1 and are never reused.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use shared::{Record, RecordId, ResourceFields};
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::RecordStorage;

struct Inner<F> {
    records: Vec<Record<F>>,
    next_id: RecordId,
}

/// Shared, cloneable in-memory store for one resource type
#[derive(Clone)]
pub struct InMemoryStorage<F> {
    inner: Arc<RwLock<Inner<F>>>,
}

impl<F: ResourceFields> InMemoryStorage<F> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-populated with the given fields, ids assigned in order
    pub fn with_records(seed: impl IntoIterator<Item = F>) -> Self {
        let mut records = Vec::new();
        let mut next_id = 1;
        for fields in seed {
            records.push(Record::new(next_id, fields));
            next_id += 1;
        }
        Self {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
        }
    }
}

impl<F: ResourceFields> Default for InMemoryStorage<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<F: ResourceFields> RecordStorage<F> for InMemoryStorage<F> {
    async fn list_records(&self) -> Result<Vec<Record<F>>> {
        let inner = self.inner.read().await;
        Ok(inner.records.clone())
    }

    async fn get_record(&self, id: RecordId) -> Result<Option<Record<F>>> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn store_record(&self, fields: F) -> Result<Record<F>> {
        let mut inner = self.inner.write().await;
        let record = Record::new(inner.next_id, fields);
        inner.next_id += 1;
        inner.records.push(record.clone());
        debug!("Stored {} with ID: {}", F::LABEL, record.id);
        Ok(record)
    }

    async fn replace_record(&self, id: RecordId, fields: F) -> Result<Option<Record<F>>> {
        let mut inner = self.inner.write().await;
        match inner.records.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                existing.fields = fields;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_record(&self, id: RecordId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() < before)
    }
}
