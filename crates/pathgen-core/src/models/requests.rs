//! Request bodies sent to the backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate-path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratePathRequest {
    pub prompt: String,
}

/// Body of `PATCH /paths/{path_id}/nodes/{node_id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeCompletionRequest {
    pub completed: bool,
}
