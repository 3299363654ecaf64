//! Client session state for the active path.
//!
//! [`PathStore`] is a plain value with action methods; [`StoreHandle`] is the
//! cloneable, lock-protected handle the application creates once and hands
//! to every hook and view. Each action runs as one synchronous critical
//! section, so readers never observe a half-applied transition.
//!
//! # Ordering
//!
//! Results are applied in the order responses arrive, not the order requests
//! were made. If a slow `fetch_path("a")` completes after a fast
//! `fetch_path("b")`, the store ends up on path `a`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::models::{Node, NodePatch, Progress};


/// State of the active learning session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStore {
    current_path_id: Option<String>,
    current_nodes: Vec<Node>,
    current_node_id: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl PathStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path_id(&self) -> Option<&str> {
        self.current_path_id.as_deref()
    }

    pub fn current_nodes(&self) -> &[Node] {
        &self.current_nodes
    }

    pub fn current_node_id(&self) -> Option<&str> {
        self.current_node_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The node currently marked active, if it belongs to the loaded path.
    pub fn current_node(&self) -> Option<&Node> {
        let node_id = self.current_node_id.as_deref()?;
        self.current_nodes.iter().find(|node| node.node_id == node_id)
    }

    /// Completion statistics for the loaded node list.
    pub fn progress(&self) -> Progress {
        Progress::of(&self.current_nodes)
    }

    /// Replaces the active path and its nodes, clearing any error.
    pub fn set_current_path(&mut self, path_id: impl Into<String>, nodes: Vec<Node>) {
        self.current_path_id = Some(path_id.into());
        self.current_nodes = nodes;
        self.error = None;
    }

    /// Marks a node as active. The id is not checked against the node list.
    pub fn set_current_node(&mut self, node_id: impl Into<String>) {
        self.current_node_id = Some(node_id.into());
    }

    /// Merges `patch` into the node with id `node_id`.
    ///
    /// Returns whether a node matched; when none does the list is untouched.
    pub fn update_node_in_list(&mut self, node_id: &str, patch: &NodePatch) -> bool {
        let mut matched = false;
        for node in self
            .current_nodes
            .iter_mut()
            .filter(|node| node.node_id == node_id)
        {
            patch.apply_to(node);
            matched = true;
        }
        matched
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Stores an error message; also ends any loading state.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.is_loading = false;
    }

    /// Returns to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Shared handle to the single [`PathStore`] of an application.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<Mutex<PathStore>>,
}

impl StoreHandle {
    /// Creates a handle around a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PathStore> {
        // Actions cannot leave the store half-written, so a poisoned lock
        // still guards a consistent value.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&PathStore) -> R) -> R {
        f(&self.lock())
    }

    /// Clones the current state.
    pub fn snapshot(&self) -> PathStore {
        self.lock().clone()
    }

    pub fn current_path_id(&self) -> Option<String> {
        self.read(|store| store.current_path_id.clone())
    }

    pub fn set_current_path(&self, path_id: impl Into<String>, nodes: Vec<Node>) {
        let path_id = path_id.into();
        debug!("store: current path -> {path_id} ({} nodes)", nodes.len());
        self.lock().set_current_path(path_id, nodes);
    }

    pub fn set_current_node(&self, node_id: impl Into<String>) {
        self.lock().set_current_node(node_id);
    }

    pub fn update_node_in_list(&self, node_id: &str, patch: &NodePatch) -> bool {
        let matched = self.lock().update_node_in_list(node_id, patch);
        if !matched {
            debug!("store: node {node_id} is not in the current path, patch ignored");
        }
        matched
    }

    pub fn set_loading(&self, loading: bool) {
        self.lock().set_loading(loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.lock().set_error(error);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }
}
