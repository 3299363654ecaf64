//! HTTP implementation of [`PathApi`] on top of `reqwest`.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Serialize};

use super::PathApi;
use crate::{
    config::ApiConfig,
    error::{ClientError, Result},
    models::{GeneratePathRequest, GeneratePathResponse, Node, NodeCompletionRequest, PathDetail},
};

/// JSON-over-HTTP client for the path backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        self.config.endpoint(segments)
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let timeout = self.config.timeout();
        debug!("{method} {url}");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{method} {url} failed with status {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::from_body(e, timeout))
    }
}

impl PathApi for ApiClient {
    async fn generate_path(&self, prompt: &str) -> Result<GeneratePathResponse> {
        let url = self.url(&["generate-path"])?;
        let body = GeneratePathRequest {
            prompt: prompt.to_string(),
        };
        self.send(Method::POST, url, Some(&body)).await
    }

    async fn get_path(&self, path_id: &str) -> Result<PathDetail> {
        let url = self.url(&["paths", path_id])?;
        self.send::<(), _>(Method::GET, url, None).await
    }

    async fn get_node(&self, path_id: &str, node_id: &str) -> Result<Node> {
        let url = self.url(&["paths", path_id, "nodes", node_id])?;
        self.send::<(), _>(Method::GET, url, None).await
    }

    async fn update_node_completion(
        &self,
        path_id: &str,
        node_id: &str,
        completed: bool,
    ) -> Result<Node> {
        let url = self.url(&["paths", path_id, "nodes", node_id])?;
        let body = NodeCompletionRequest { completed };
        self.send(Method::PATCH, url, Some(&body)).await
    }
}
