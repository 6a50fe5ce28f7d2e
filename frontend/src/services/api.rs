use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{ErrorBody, FilterSet, Record, RecordId, ResourceFields};

use crate::config::ClientConfig;

/// Failure of a single resource request. Never retried; surfaced as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connection failure, unreadable response, or an unexpected status class
    #[error("Network error: {0}")]
    Transport(String),
    /// 404
    #[error("Not found: {0}")]
    NotFound(String),
    /// Any other 4xx, or a draft rejected locally before sending
    #[error("Validation failed: {0}")]
    Validation(String),
    /// 5xx
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

/// Operations on one REST resource.
///
/// This is the seam between the controllers and the transport; tests swap in
/// an in-memory implementation.
#[async_trait]
pub trait ResourceApi<F: ResourceFields>: Send + Sync {
    /// Full ordered collection matching every non-empty filter
    async fn list(&self, filters: &FilterSet) -> Result<Vec<Record<F>>, ApiError>;

    async fn get(&self, id: RecordId) -> Result<Record<F>, ApiError>;

    /// Persist a draft; the returned record carries the server-assigned ID
    async fn create(&self, draft: &F) -> Result<Record<F>, ApiError>;

    /// Replace every mutable field of a record
    async fn update(&self, id: RecordId, draft: &F) -> Result<Record<F>, ApiError>;

    async fn delete(&self, id: RecordId) -> Result<(), ApiError>;
}

/// HTTP client for one resource type
pub struct HttpResourceClient<F> {
    client: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> F>,
}

impl<F> Clone for HttpResourceClient<F> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<F> fmt::Debug for HttpResourceClient<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResourceClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl<F: ResourceFields> HttpResourceClient<F> {
    /// Create a client against the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Share one connection pool between several resource clients
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, F::BASE_PATH)
    }

    pub fn item_url(&self, id: RecordId) -> String {
        format!("{}{}/{}", self.base_url, F::BASE_PATH, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;
        check_status(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
    }
}

/// Map a non-2xx response to its error kind, preferring the `{"error"}` body text
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    warn!("Request failed with status {}: {}", status, message);

    Err(classify(status, message))
}

fn classify(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound(message)
    } else if status.is_client_error() {
        ApiError::Validation(message)
    } else if status.is_server_error() {
        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    } else {
        ApiError::Transport(format!("Unexpected status {}: {}", status, message))
    }
}

#[async_trait]
impl<F: ResourceFields> ResourceApi<F> for HttpResourceClient<F> {
    async fn list(&self, filters: &FilterSet) -> Result<Vec<Record<F>>, ApiError> {
        let query: Vec<(&str, &str)> = filters.active().collect();
        debug!("GET {} - query: {:?}", self.collection_url(), query);

        let request = self.client.get(self.collection_url()).query(&query);
        self.send_json(request).await
    }

    async fn get(&self, id: RecordId) -> Result<Record<F>, ApiError> {
        debug!("GET {}", self.item_url(id));
        self.send_json(self.client.get(self.item_url(id))).await
    }

    async fn create(&self, draft: &F) -> Result<Record<F>, ApiError> {
        debug!("POST {} - draft: {:?}", self.collection_url(), draft);
        self.send_json(self.client.post(self.collection_url()).json(draft))
            .await
    }

    async fn update(&self, id: RecordId, draft: &F) -> Result<Record<F>, ApiError> {
        debug!("PUT {} - draft: {:?}", self.item_url(id), draft);
        self.send_json(self.client.put(self.item_url(id)).json(draft))
            .await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        debug!("DELETE {}", self.item_url(id));
        self.send(self.client.delete(self.item_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AnimalFields, CareFields};

    #[test]
    fn test_urls_follow_resource_base_path() {
        let animals: HttpResourceClient<AnimalFields> =
            HttpResourceClient::new("http://localhost:5000/");
        assert_eq!(animals.collection_url(), "http://localhost:5000/api/animais");
        assert_eq!(animals.item_url(4), "http://localhost:5000/api/animais/4");

        let cares: HttpResourceClient<CareFields> = HttpResourceClient::new("http://zoo");
        assert_eq!(cares.collection_url(), "http://zoo/api/cuidados");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            classify(StatusCode::NOT_FOUND, "gone".into()),
            ApiError::NotFound("gone".into())
        );
        assert_eq!(
            classify(StatusCode::BAD_REQUEST, "Field 'nome' is required".into()),
            ApiError::Validation("Field 'nome' is required".into())
        );
        assert_eq!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, "bad".into()),
            ApiError::Validation("bad".into())
        );
        assert_eq!(
            classify(StatusCode::BAD_GATEWAY, "upstream".into()),
            ApiError::Server {
                status: 502,
                message: "upstream".into()
            }
        );
        assert!(matches!(
            classify(StatusCode::NOT_MODIFIED, String::new()),
            ApiError::Transport(_)
        ));
    }
}
