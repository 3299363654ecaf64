//! Partial node updates.

use serde::{Deserialize, Serialize};

use super::Node;

/// A partial [`Node`]: every present field replaces the node's value,
/// absent fields are left alone.
///
/// Identifiers are not patchable; the store locates nodes by `node_id` and
/// never moves them between paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub markdown_content: Option<String>,
    pub boilerplate: Option<String>,
    pub order: Option<i64>,
    pub completed: Option<bool>,
}

impl NodePatch {
    /// A patch that only touches the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the present fields into `node`.
    pub fn apply_to(&self, node: &mut Node) {
        if let Some(title) = &self.title {
            node.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            node.description.clone_from(description);
        }
        if let Some(content) = &self.content {
            node.content.clone_from(content);
        }
        if let Some(markdown) = &self.markdown_content {
            node.markdown_content = Some(markdown.clone());
        }
        if let Some(boilerplate) = &self.boilerplate {
            node.boilerplate = Some(boilerplate.clone());
        }
        if let Some(order) = self.order {
            node.order = order;
        }
        if let Some(completed) = self.completed {
            node.completed = completed;
        }
    }
}
