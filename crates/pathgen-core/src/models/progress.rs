//! Completion statistics over a node list.

use serde::{Deserialize, Serialize};

use super::Node;

/// How many nodes of a path are done.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Total number of nodes
    pub total: u32,
    /// Number of completed nodes
    pub completed: u32,
}

impl Progress {
    /// Counts completed nodes.
    pub fn of(nodes: &[Node]) -> Self {
        let total = nodes.len() as u32;
        let completed = nodes.iter().filter(|node| node.completed).count() as u32;
        Self { total, completed }
    }

    /// Number of nodes still pending
    pub fn pending(&self) -> u32 {
        self.total - self.completed
    }

    /// True when every node is completed and there is at least one
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
