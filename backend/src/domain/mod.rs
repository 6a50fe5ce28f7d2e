//! # Domain Module
//!
//! Business rules for the zoo records: validation of submitted fields, list
//! filtering, and the per-resource [`RecordService`] that applies both around
//! the storage layer.
//!
//! ## Business Rules
//!
//! - Records are created and destroyed only here; the client never picks an ID
//! - An update is a full replace of the mutable fields, validated like a create
//! - Deleting an unknown ID is reported as not found, never as success

pub mod filters;
pub mod record_service;
pub mod validation;

pub use filters::Matches;
pub use record_service::RecordService;
pub use validation::Validate;

use shared::{RecordId, ResourceFields};

/// A resource the server knows how to validate and filter
pub trait ServerResource: ResourceFields + Validate + Matches {}

impl<F: ResourceFields + Validate + Matches> ServerResource for F {}

/// Errors returned by the domain services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{label} not found: {id}")]
    NotFound { label: &'static str, id: RecordId },
    /// Path segment that is not a record ID at all
    #[error("{label} not found: {raw}")]
    UnknownPath { label: &'static str, raw: String },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn not_found<F: ResourceFields>(id: RecordId) -> Self {
        Self::NotFound { label: F::LABEL, id }
    }
}
