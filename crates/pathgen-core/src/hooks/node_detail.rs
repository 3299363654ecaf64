//! Self-contained node detail hook used by the workspace.

use std::sync::Mutex;

use log::{debug, warn};

use super::{lock, NODE_DETAIL_FALLBACK};
use crate::{api::PathApi, error::display_message, models::Node};

/// Observable state of a [`NodeDetail`] hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDetailState {
    pub node: Option<Node>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    path_id: Option<String>,
    node_id: Option<String>,
    state: NodeDetailState,
    latest_request: u64,
}

/// Fetches one node for display, independently of the path store.
///
/// The hook fetches when mounted and again whenever its inputs change.
/// Each fetch takes a request token; a response that arrives after a newer
/// fetch has started is dropped, so the node shown always matches the
/// current inputs.
#[derive(Debug)]
pub struct NodeDetail<A> {
    api: A,
    inner: Mutex<Inner>,
}

impl<A: PathApi> NodeDetail<A> {
    /// Creates the hook without fetching.
    pub fn new(api: A, path_id: Option<String>, node_id: Option<String>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                path_id,
                node_id,
                ..Default::default()
            }),
        }
    }

    /// Creates the hook and runs the initial fetch.
    pub async fn mount(api: A, path_id: Option<String>, node_id: Option<String>) -> Self {
        let detail = Self::new(api, path_id, node_id);
        detail.refetch().await;
        detail
    }

    pub fn state(&self) -> NodeDetailState {
        lock(&self.inner).state.clone()
    }

    pub fn node(&self) -> Option<Node> {
        lock(&self.inner).state.node.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.inner).state.is_loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.inner).state.error.clone()
    }

    /// Current `(path_id, node_id)` inputs.
    pub fn inputs(&self) -> (Option<String>, Option<String>) {
        let inner = lock(&self.inner);
        (inner.path_id.clone(), inner.node_id.clone())
    }

    /// Replaces the inputs and fetches if they changed.
    ///
    /// Returns whether a fetch ran.
    pub async fn set_inputs(&self, path_id: Option<String>, node_id: Option<String>) -> bool {
        {
            let mut inner = lock(&self.inner);
            if inner.path_id == path_id && inner.node_id == node_id {
                return false;
            }
            inner.path_id = path_id;
            inner.node_id = node_id;
        }
        self.refetch().await;
        true
    }

    /// Fetches the node for the current inputs.
    ///
    /// With a missing input the node is cleared and no request is made.
    pub async fn refetch(&self) {
        let (token, path_id, node_id) = {
            let mut inner = lock(&self.inner);
            inner.latest_request += 1;
            let token = inner.latest_request;

            match (inner.path_id.clone(), inner.node_id.clone()) {
                (Some(path_id), Some(node_id)) => {
                    inner.state.is_loading = true;
                    inner.state.error = None;
                    (token, path_id, node_id)
                }
                _ => {
                    inner.state.node = None;
                    inner.state.is_loading = false;
                    return;
                }
            }
        };

        let _fetch = PendingFetch {
            inner: &self.inner,
            token,
        };
        let result = self.api.get_node(&path_id, &node_id).await;

        let mut inner = lock(&self.inner);
        if inner.latest_request != token {
            debug!("Discarding stale response for node {node_id} of path {path_id}");
            return;
        }
        match result {
            Ok(node) => inner.state.node = Some(node),
            Err(e) => {
                warn!("Loading node {node_id} of path {path_id} failed: {e}");
                inner.state.error = Some(display_message(&e, NODE_DETAIL_FALLBACK));
                inner.state.node = None;
            }
        }
        // `_fetch` drops after this guard and takes the lock again.
        drop(inner);
    }
}

/// Ends the loading state of a fetch unless a newer fetch replaced it.
struct PendingFetch<'a> {
    inner: &'a Mutex<Inner>,
    token: u64,
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        let mut inner = lock(self.inner);
        if inner.latest_request == self.token {
            inner.state.is_loading = false;
        }
    }
}
