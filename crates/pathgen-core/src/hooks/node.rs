//! Node fetch and completion hook.

use log::{debug, info, warn};

use super::{HookStatus, StatusCell, FETCH_NODE_FALLBACK, UPDATE_NODE_FALLBACK};
use crate::{
    api::PathApi,
    error::{display_message, ClientError},
    models::{Node, NodePatch},
    store::StoreHandle,
};

/// Node-level operations against the store's current path.
#[derive(Debug)]
pub struct NodeOperations<A> {
    api: A,
    store: StoreHandle,
    status: StatusCell,
}

impl<A: PathApi> NodeOperations<A> {
    pub fn new(api: A, store: StoreHandle) -> Self {
        Self {
            api,
            store,
            status: StatusCell::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn status(&self) -> HookStatus {
        self.status.get()
    }

    /// Fetches a node and marks it as the store's current node.
    pub async fn fetch_node(&self, path_id: &str, node_id: &str) -> Option<Node> {
        let _in_flight = self.status.begin(None);

        match self.api.get_node(path_id, node_id).await {
            Ok(node) => {
                debug!("Fetched node {node_id} of path {path_id}");
                self.store.set_current_node(node_id);
                Some(node)
            }
            Err(e) => {
                warn!("Fetching node {node_id} of path {path_id} failed: {e}");
                self.status.set_error(display_message(&e, FETCH_NODE_FALLBACK));
                None
            }
        }
    }

    /// Sets the completion flag of a node of the current path.
    ///
    /// Fails without touching the network when no path is loaded. On
    /// success the backend's `completed` value is merged into the store.
    pub async fn update_node_completion(&self, node_id: &str, completed: bool) -> bool {
        let Some(path_id) = self.store.current_path_id() else {
            self.status
                .set_error(display_message(&ClientError::NoActivePath, UPDATE_NODE_FALLBACK));
            return false;
        };

        match self
            .api
            .update_node_completion(&path_id, node_id, completed)
            .await
        {
            Ok(node) => {
                info!("Node {node_id} of path {path_id} completed = {}", node.completed);
                self.store
                    .update_node_in_list(node_id, &NodePatch::completed(node.completed));
                true
            }
            Err(e) => {
                warn!("Updating node {node_id} of path {path_id} failed: {e}");
                self.status.set_error(display_message(&e, UPDATE_NODE_FALLBACK));
                false
            }
        }
    }
}
