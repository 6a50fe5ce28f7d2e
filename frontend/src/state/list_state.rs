//! # List State Module
//!
//! Owns the authoritative in-memory collection for one resource, the active
//! filters, and the load state machine:
//!
//! ```text
//! Idle ──mount/refresh──▶ Loading ──ok──▶ Loaded
//!                            │
//!                            └──err──▶ LoadError (last collection kept)
//! ```
//!
//! The collection is a cache of the server: it is replaced wholesale by every
//! successful refresh and never patched. Mutations refresh only after the
//! server confirmed them. Every effectful operation takes `&mut self`, so the
//! requests of one controller can never overlap.

use log::{debug, info, warn};
use shared::{FieldError, FilterSet, Record, RecordId, ResourceFields};

use crate::services::{ApiError, ResourceApi};

/// Where the last list request stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded,
    /// The last refresh failed; the previously loaded records are still shown
    LoadError(ApiError),
}

/// Controller for one resource's list view
pub struct ListController<F: ResourceFields, A> {
    api: A,
    records: Vec<Record<F>>,
    filters: FilterSet,
    state: LoadState,
    refreshes: u64,
}

impl<F: ResourceFields, A: ResourceApi<F>> ListController<F, A> {
    pub fn new(api: A) -> Self {
        let filters = F::FILTER_FIELDS.iter().map(|field| (*field, "")).collect();
        Self {
            api,
            records: Vec::new(),
            filters,
            state: LoadState::Idle,
            refreshes: 0,
        }
    }

    /// Initial load with the current (empty) filters
    pub async fn mount(&mut self) -> Result<(), ApiError> {
        self.refresh().await
    }

    pub fn records(&self) -> &[Record<F>] {
        &self.records
    }

    pub fn find(&self, id: RecordId) -> Option<&Record<F>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        match &self.state {
            LoadState::LoadError(e) => Some(e),
            _ => None,
        }
    }

    /// Number of list requests issued so far
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Update one filter value. Takes effect on the next refresh only.
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) -> Result<(), FieldError> {
        self.filters.set_for::<F>(field, value)
    }

    /// Empty every filter and reload immediately
    pub async fn clear_filters(&mut self) -> Result<(), ApiError> {
        self.filters.clear();
        self.refresh().await
    }

    /// Re-fetch the collection with the active filters and replace it
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.state = LoadState::Loading;
        self.refreshes += 1;

        match self.api.list(&self.filters).await {
            Ok(records) => {
                info!("Loaded {} {} records", records.len(), F::LABEL);
                self.records = records;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load {} records: {}", F::LABEL, e);
                self.state = LoadState::LoadError(e.clone());
                Err(e)
            }
        }
    }

    /// Reload after a confirmed mutation. A failure stays visible through
    /// [`ListController::load_error`] and does not fail the mutation.
    async fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.refresh().await {
            debug!("Refresh after {} mutation failed: {}", F::LABEL, e);
        }
    }

    /// Create a record, then refresh.
    ///
    /// A failed create leaves the collection and filters untouched. A refresh
    /// failure after a successful create still returns the created record; it
    /// is reported through [`ListController::load_error`].
    pub async fn create_record(&mut self, draft: &F) -> Result<Record<F>, ApiError> {
        let created = self.api.create(draft).await.map_err(|e| {
            warn!("Failed to create {}: {}", F::LABEL, e);
            e
        })?;
        info!("Created {} with ID: {}", F::LABEL, created.id);

        self.refresh_after_mutation().await;
        Ok(created)
    }

    /// Replace a record's fields, then refresh
    pub async fn update_record(&mut self, id: RecordId, draft: &F) -> Result<Record<F>, ApiError> {
        let updated = self.api.update(id, draft).await.map_err(|e| {
            warn!("Failed to update {} {}: {}", F::LABEL, id, e);
            e
        })?;
        info!("Updated {} with ID: {}", F::LABEL, id);

        self.refresh_after_mutation().await;
        Ok(updated)
    }

    /// Delete a record, then refresh. The caller confirms with the user first.
    pub async fn delete_record(&mut self, id: RecordId) -> Result<(), ApiError> {
        self.api.delete(id).await.map_err(|e| {
            warn!("Failed to delete {} {}: {}", F::LABEL, id, e);
            e
        })?;
        info!("Deleted {} with ID: {}", F::LABEL, id);

        self.refresh_after_mutation().await;
        Ok(())
    }
}
