//! View-layer building blocks shared by both list screens.

pub mod collaborators;
pub mod resource_view;
pub mod table;

pub use collaborators::{Confirm, LogNotifier, Notifier};
pub use resource_view::{ResourceView, ViewError};
pub use table::TableColumns;
