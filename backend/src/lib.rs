//! # Zoo Admin Backend
//!
//! REST backend for the zoo administration UI: animal records under
//! `/api/animais` and care schedules under `/api/cuidados`.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (validation, filtering, RecordService)
//!     ↓
//! Storage Layer (RecordStorage, in-memory collections)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use shared::{AnimalFields, CareFields};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::RecordService;
use crate::storage::{seed, InMemoryStorage};

/// Main application state that holds one service per resource
#[derive(Clone)]
pub struct AppState {
    pub animal_service: RecordService<AnimalFields>,
    pub care_service: RecordService<CareFields>,
}

impl AppState {
    /// State backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::with_storage(InMemoryStorage::new(), InMemoryStorage::new())
    }

    pub fn with_storage(
        animals: InMemoryStorage<AnimalFields>,
        cares: InMemoryStorage<CareFields>,
    ) -> Self {
        Self {
            animal_service: RecordService::new(Arc::new(animals)),
            care_service: RecordService::new(Arc::new(cares)),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &ServerConfig) -> AppState {
    if config.seed_demo_data {
        info!("Setting up in-memory storage with demo records");
        AppState::with_storage(
            InMemoryStorage::with_records(seed::demo_animals()),
            InMemoryStorage::with_records(seed::demo_cares()),
        )
    } else {
        info!("Setting up empty in-memory storage");
        AppState::in_memory()
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, ui_origin: &str) -> Result<Router> {
    let origin = ui_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid UI origin '{}'", ui_origin))?;

    // CORS setup to allow the admin UI to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let router = Router::new()
        .merge(io::resource_routes(app_state.animal_service))
        .merge(io::resource_routes(app_state.care_service))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use shared::CareRecord;
    use tower::ServiceExt;

    #[test]
    fn test_create_router_rejects_bad_origin() {
        assert!(create_router(AppState::in_memory(), "http://bad\norigin").is_err());
    }

    #[tokio::test]
    async fn test_seeded_backend_serves_both_resources() {
        let state = initialize_backend(&ServerConfig::default());
        let router = create_router(state, config::DEFAULT_UI_ORIGIN).unwrap();

        let response = router
            .clone()
            .oneshot(Request::get("/api/cuidados").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let cares: Vec<CareRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(cares.len(), seed::demo_cares().len());

        let response = router
            .oneshot(Request::get("/api/animais/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unseeded_backend_starts_empty() {
        let config = ServerConfig {
            seed_demo_data: false,
            ..ServerConfig::default()
        };
        let state = initialize_backend(&config);

        let animals = state
            .animal_service
            .list_records(&shared::FilterSet::new())
            .await
            .unwrap();
        assert!(animals.is_empty());
    }
}
