//! # REST API for Record Management
//!
//! Generic endpoints for listing, retrieving, creating, replacing and deleting
//! the records of one resource. Mounted once per resource under its base path.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use shared::{ErrorBody, FilterSet, MessageBody, RecordId, ResourceFields};
use tracing::{error, info, warn};

use crate::domain::{RecordService, ServerResource, ServiceError};

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } | ServiceError::UnknownPath { .. } => StatusCode::NOT_FOUND,
            ServiceError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Parse the `:id` segment; anything but an unsigned integer names no record
fn record_id<F: ResourceFields>(raw: String) -> Result<RecordId, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::UnknownPath { label: F::LABEL, raw })
}

/// Undecodable bodies are reported like any other validation failure
fn request_fields<F>(payload: Result<Json<F>, JsonRejection>) -> Result<F, ServiceError> {
    payload
        .map(|Json(fields)| fields)
        .map_err(|rejection| ServiceError::Validation(rejection.body_text()))
}

/// Routes for `{base}` and `{base}/:id` of one resource
pub fn resource_routes<F: ServerResource>(service: RecordService<F>) -> Router {
    let item_path = format!("{}/:id", F::BASE_PATH);

    Router::new()
        .route(F::BASE_PATH, get(list_records::<F>).post(create_record::<F>))
        .route(
            &item_path,
            get(get_record::<F>)
                .put(update_record::<F>)
                .delete(delete_record::<F>),
        )
        .with_state(service)
}

/// List records, constrained by any non-empty query parameters
pub async fn list_records<F: ServerResource>(
    State(service): State<RecordService<F>>,
    Query(filters): Query<FilterSet>,
) -> Result<Json<Vec<shared::Record<F>>>, ServiceError> {
    info!("GET {} - filters: {:?}", F::BASE_PATH, filters);

    let records = service.list_records(&filters).await?;
    Ok(Json(records))
}

/// Get a record by ID
pub async fn get_record<F: ServerResource>(
    State(service): State<RecordService<F>>,
    Path(raw): Path<String>,
) -> Result<Json<shared::Record<F>>, ServiceError> {
    info!("GET {}/{}", F::BASE_PATH, raw);

    let id = record_id::<F>(raw)?;
    let record = service.get_record(id).await?;
    Ok(Json(record))
}

/// Create a new record
pub async fn create_record<F: ServerResource>(
    State(service): State<RecordService<F>>,
    payload: Result<Json<F>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let fields = request_fields(payload)?;
    info!("POST {} - request: {:?}", F::BASE_PATH, fields);

    match service.create_record(fields).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) => {
            warn!("Failed to create {}: {}", F::LABEL, e);
            Err(e)
        }
    }
}

/// Replace every field of a record
pub async fn update_record<F: ServerResource>(
    State(service): State<RecordService<F>>,
    Path(raw): Path<String>,
    payload: Result<Json<F>, JsonRejection>,
) -> Result<Json<shared::Record<F>>, ServiceError> {
    let id = record_id::<F>(raw)?;
    let fields = request_fields(payload)?;
    info!("PUT {}/{} - request: {:?}", F::BASE_PATH, id, fields);

    match service.update_record(id, fields).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            warn!("Failed to update {} {}: {}", F::LABEL, id, e);
            Err(e)
        }
    }
}

/// Delete a record
pub async fn delete_record<F: ServerResource>(
    State(service): State<RecordService<F>>,
    Path(raw): Path<String>,
) -> Result<Json<MessageBody>, ServiceError> {
    info!("DELETE {}/{}", F::BASE_PATH, raw);

    let id = record_id::<F>(raw)?;
    service.delete_record(id).await?;
    Ok(Json(MessageBody {
        message: format!("Deleted {} {}", F::LABEL, id),
    }))
}
