//! # Storage Traits
//!
//! The storage abstraction the domain layer talks to. Each resource gets its own
//! `RecordStorage<F>` so animals and cares never share a collection or an id
//! counter.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Record, RecordId, ResourceFields};

/// Interface for record storage operations of one resource type
#[async_trait]
pub trait RecordStorage<F: ResourceFields>: Send + Sync {
    /// All records in insertion order
    async fn list_records(&self) -> Result<Vec<Record<F>>>;

    /// Retrieve a specific record by ID
    async fn get_record(&self, id: RecordId) -> Result<Option<Record<F>>>;

    /// Store new fields under a freshly assigned ID and return the persisted record
    async fn store_record(&self, fields: F) -> Result<Record<F>>;

    /// Replace every mutable field of an existing record.
    /// Returns `None` if no record has this ID.
    async fn replace_record(&self, id: RecordId, fields: F) -> Result<Option<Record<F>>>;

    /// Delete a record.
    /// Returns true if the record was found and deleted, false otherwise
    async fn delete_record(&self, id: RecordId) -> Result<bool>;
}
