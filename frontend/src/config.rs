//! Client configuration.

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Where the admin UI finds its backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root without the `/api/...` path (`ZOO_ADMIN_API_URL`)
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        let api_base_url = api_base_url.into();
        reqwest::Url::parse(&api_base_url)
            .with_context(|| format!("invalid API base URL '{}'", api_base_url))?;
        Ok(Self { api_base_url })
    }

    pub fn from_env() -> Result<Self> {
        match std::env::var("ZOO_ADMIN_API_URL") {
            Ok(url) => Self::new(url),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
