pub mod api;

pub use api::{ApiError, HttpResourceClient, ResourceApi};
