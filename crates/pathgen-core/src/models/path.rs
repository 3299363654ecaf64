//! Path payloads returned by the backend.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Node;

/// Response of a path generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratePathResponse {
    /// Identifier of the newly generated path
    pub path_id: String,

    /// Generated nodes, in path order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Optional informational message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A previously generated path with all of its nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathDetail {
    /// Unique identifier for the path
    pub path_id: String,

    /// The prompt the path was generated from
    pub prompt: String,

    /// Nodes of the path, in path order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Timestamp when the path was created (UTC)
    pub created_at: Timestamp,
}
