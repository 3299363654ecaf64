//! Collection wrapper types for displaying groups of nodes.

use std::{fmt, ops::Index};

use crate::models::Node;

/// Borrowed list of nodes, displayed in exercise order.
///
/// Nodes with the same `order` keep their relative position.
///
/// # Examples
///
/// ```rust
/// use pathgen_core::{display::Nodes, models::Node};
///
/// let nodes: Vec<Node> = serde_json::from_str(
///     r#"[{"node_id":"b","path_id":"p","title":"Second","order":2},
///         {"node_id":"a","path_id":"p","title":"First","order":1}]"#,
/// )?;
/// let output = Nodes(&nodes).to_string();
/// assert!(output.find("First").unwrap() < output.find("Second").unwrap());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Nodes<'a>(pub &'a [Node]);

impl<'a> Nodes<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&'a Node> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Node> {
        self.0.iter()
    }

    /// Nodes sorted by `order`, ties in list order.
    pub fn ordered(&self) -> Vec<&'a Node> {
        let mut nodes: Vec<&Node> = self.0.iter().collect();
        nodes.sort_by_key(|node| node.order);
        nodes
    }
}

impl Index<usize> for Nodes<'_> {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for Nodes<'a> {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Nodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No hay ejercicios en este path.");
        }
        for node in self.ordered() {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
