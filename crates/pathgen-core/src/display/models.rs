//! Display implementations for domain models.
//!
//! Output is markdown: a heading per path and per exercise, metadata as a
//! bullet list, and completion shown with an icon.

use std::fmt;

use super::{collections::Nodes, datetime::LocalDateTime};
use crate::{
    models::{Node, PathDetail, Progress},
    store::PathStore,
};

/// Completion label of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion(pub bool);

impl Completion {
    /// Single-character icon used in lists.
    pub fn icon(self) -> &'static str {
        if self.0 {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "✓ Completado" } else { "En progreso" })
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} completados", self.completed, self.total)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {}. {} (`{}`)",
            Completion(self.completed).icon(),
            self.order,
            self.title,
            self.node_id
        )?;
        writeln!(f)?;

        if !self.description.trim().is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PathDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.prompt)?;
        writeln!(f)?;

        writeln!(f, "- Path: `{}`", self.path_id)?;
        writeln!(f, "- Creado: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Progreso: {}", Progress::of(&self.nodes))?;

        writeln!(f, "\n## Ejercicios")?;
        writeln!(f)?;
        write!(f, "{}", Nodes(&self.nodes))
    }
}

/// Overview of the store's active path.
///
/// Used after a generation or a completion update, when only the store's
/// view of the path is at hand.
pub struct PathOverview<'a>(pub &'a PathStore);

impl fmt::Display for PathOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.0;
        let Some(path_id) = store.current_path_id() else {
            return writeln!(f, "No hay un path activo.");
        };

        writeln!(f, "# Path `{path_id}`")?;
        writeln!(f)?;
        writeln!(f, "- Progreso: {}", store.progress())?;
        if let Some(node) = store.current_node() {
            writeln!(f, "- Ejercicio actual: {}. {}", node.order, node.title)?;
        }
        if let Some(error) = store.error() {
            writeln!(f, "- Error: {error}")?;
        }

        writeln!(f, "\n## Ejercicios")?;
        writeln!(f)?;
        write!(f, "{}", Nodes(store.current_nodes()))
    }
}
