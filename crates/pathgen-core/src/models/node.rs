//! Node model definition.

use serde::{Deserialize, Serialize};

/// One exercise within a learning path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Unique identifier for the node
    pub node_id: String,

    /// ID of the parent path
    pub path_id: String,

    /// Title of the exercise
    pub title: String,

    /// Short human-readable description
    #[serde(default)]
    pub description: String,

    /// Fallback content when no markdown statement is available
    #[serde(default)]
    pub content: String,

    /// Full statement of the exercise in markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,

    /// Starter source text for the code editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boilerplate: Option<String>,

    /// Position of the node within the path
    pub order: i64,

    /// Whether the learner completed the exercise
    #[serde(default)]
    pub completed: bool,
}
