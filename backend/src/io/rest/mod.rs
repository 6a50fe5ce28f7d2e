//! # REST API Interface Layer
//!
//! HTTP endpoints for the zoo admin backend. Translates domain errors to status
//! codes (`400` validation, `404` unknown ID, `500` storage failure) with a
//! `{"error": "..."}` body, and logs every request.

pub mod record_apis;

pub use record_apis::*;
