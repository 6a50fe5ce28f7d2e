//! # Storage Module
//!
//! Record persistence for the zoo admin backend. The domain layer only sees the
//! [`RecordStorage`] trait; the shipped implementation keeps records in memory.
//!
//! - **traits**: the storage abstraction
//! - **memory**: lock-guarded in-memory collections, one per resource
//! - **seed**: demo records loaded at startup when seeding is enabled

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::InMemoryStorage;
pub use traits::RecordStorage;
