//! Client configuration: backend base URL and request timeout.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable consulted for the base URL.
pub const BASE_URL_ENV: &str = "PATHGEN_API_BASE_URL";

/// Fixed request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated settings for talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the URL does not parse, is not
    /// `http`/`https`, or the timeout is zero.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| {
            ClientError::configuration(format!("invalid base URL '{base_url}': {e}"))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::configuration(format!(
                "base URL '{base_url}' must be an http or https URL"
            )));
        }
        if timeout.is_zero() {
            return Err(ClientError::configuration("timeout must be greater than zero"));
        }

        Ok(Self {
            base_url: parsed,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL for an endpoint below the base URL.
    ///
    /// Each segment is appended as one percent-encoded path segment, so
    /// identifiers containing `/` or `?` cannot escape their position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::configuration("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Picks the base URL: explicit value, then environment, then default.
///
/// Blank values are treated as unset.
pub fn resolve_base_url(explicit: Option<&str>, from_env: Option<&str>) -> String {
    explicit
        .filter(|value| !value.trim().is_empty())
        .or_else(|| from_env.filter(|value| !value.trim().is_empty()))
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}
