//! # Zoo Admin Frontend
//!
//! Client core of the zoo administration UI. Everything here is independent of
//! the widget toolkit that draws it:
//!
//! - `services` - typed HTTP client per REST resource
//! - `state` - list controller, record form and modal state
//! - `components` - the list-detail view that ties them together
//! - `app` / `routes` - the two screens and navigation between them

pub mod app;
pub mod components;
pub mod config;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use app::AdminApp;
pub use config::ClientConfig;
pub use routes::Route;
