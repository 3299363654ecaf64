//! Builder for creating and configuring [`ApiClient`] instances.

use std::{sync::Arc, time::Duration};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use super::ApiClient;
use crate::{
    config::{resolve_base_url, ApiConfig, BASE_URL_ENV, DEFAULT_TIMEOUT},
    error::{ClientError, Result},
};

/// Builder for creating and configuring API clients.
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    ///
    /// If not specified, uses `$PATHGEN_API_BASE_URL`, then
    /// `http://localhost:8000/api`.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Overrides the 30 second request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the base URL or timeout is
    /// invalid, or the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient> {
        let from_env = std::env::var(BASE_URL_ENV).ok();
        let base_url = resolve_base_url(self.base_url.as_deref(), from_env.as_deref());
        let config = ApiConfig::new(&base_url, self.timeout.unwrap_or(DEFAULT_TIMEOUT))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::configuration(format!("HTTP client error: {e}")))?;

        Ok(ApiClient {
            http,
            config: Arc::new(config),
        })
    }
}
