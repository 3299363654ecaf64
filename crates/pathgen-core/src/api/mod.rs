//! Backend contract and its HTTP implementation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Hooks      │    │    PathApi      │    │     Backend     │
//! │ (generate, path,│───▶│  (ApiClient or  │───▶│   (HTTP/JSON)   │
//! │  node, detail)  │    │   test double)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | generate path | POST | `/generate-path` |
//! | get path | GET | `/paths/{path_id}` |
//! | get node | GET | `/paths/{path_id}/nodes/{node_id}` |
//! | update completion | PATCH | `/paths/{path_id}/nodes/{node_id}` |
//!
//! No operation retries. Every failure, including a timeout, is returned to
//! the caller as-is.

use std::future::Future;

use crate::{
    error::Result,
    models::{GeneratePathResponse, Node, PathDetail},
};

pub mod builder;
pub mod client;

pub use builder::ApiClientBuilder;
pub use client::ApiClient;

/// The four backend operations the client layer consumes.
pub trait PathApi: Send + Sync {
    /// Requests a new path generated from `prompt`.
    fn generate_path(&self, prompt: &str)
        -> impl Future<Output = Result<GeneratePathResponse>> + Send;

    /// Fetches an existing path with its nodes.
    fn get_path(&self, path_id: &str) -> impl Future<Output = Result<PathDetail>> + Send;

    /// Fetches one node of a path.
    fn get_node(&self, path_id: &str, node_id: &str)
        -> impl Future<Output = Result<Node>> + Send;

    /// Sets the completion flag of a node and returns the updated node.
    fn update_node_completion(
        &self,
        path_id: &str,
        node_id: &str,
        completed: bool,
    ) -> impl Future<Output = Result<Node>> + Send;
}
