//! In-memory [`PathApi`] used by unit tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use jiff::Timestamp;
use tokio::sync::Semaphore;

use crate::{
    api::PathApi,
    error::{ClientError, Result},
    hooks::lock,
    models::{GeneratePathResponse, Node, PathDetail},
};

#[derive(Debug, Default)]
struct State {
    paths: HashMap<String, PathDetail>,
    generated: Option<PathDetail>,
    failure: Option<u16>,
    calls: Vec<String>,
    gates: HashMap<String, Arc<Semaphore>>,
}

/// Backend double that serves paths from memory and records every call.
///
/// Calls are recorded as `generate:{prompt}`, `path:{id}`,
/// `node:{path}/{node}` and `complete:{path}/{node}={flag}`. A call whose key
/// has a gate waits for a permit before answering.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeBackend {
    state: Arc<Mutex<State>>,
}

pub(crate) fn node(path_id: &str, node_id: &str, order: i64) -> Node {
    Node {
        node_id: node_id.to_string(),
        path_id: path_id.to_string(),
        title: format!("Exercise {node_id}"),
        description: format!("Description of {node_id}"),
        content: String::new(),
        markdown_content: Some(format!("# {node_id}\n\nSolve **{node_id}**.")),
        boilerplate: Some("package main\n".to_string()),
        order,
        completed: false,
    }
}

pub(crate) fn path(path_id: &str, prompt: &str, node_ids: &[&str]) -> PathDetail {
    PathDetail {
        path_id: path_id.to_string(),
        prompt: prompt.to_string(),
        nodes: node_ids
            .iter()
            .zip(1..)
            .map(|(node_id, order)| node(path_id, node_id, order))
            .collect(),
        created_at: Timestamp::from_second(1_714_559_400).unwrap(),
    }
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_path(self, path: PathDetail) -> Self {
        lock(&self.state).paths.insert(path.path_id.clone(), path);
        self
    }

    /// Sets the path returned by the next generation requests.
    pub(crate) fn with_generated(self, path: PathDetail) -> Self {
        lock(&self.state).generated = Some(path);
        self
    }

    /// Makes every later call fail with `status`, or succeed again with `None`.
    pub(crate) fn fail_with(&self, status: Option<u16>) {
        lock(&self.state).failure = status;
    }

    /// Registers a closed gate for calls with `key` (see type docs).
    pub(crate) fn gate(&self, key: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        lock(&self.state)
            .gates
            .insert(key.to_string(), Arc::clone(&gate));
        gate
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        lock(&self.state).calls.clone()
    }

    /// Yields until at least `count` calls were recorded.
    pub(crate) async fn wait_for_calls(&self, count: usize) {
        while self.calls().len() < count {
            tokio::task::yield_now().await;
        }
    }

    async fn enter(&self, call: String, key: String) -> Result<()> {
        let (gate, failure) = {
            let mut state = lock(&self.state);
            state.calls.push(call);
            (state.gates.get(&key).cloned(), state.failure)
        };
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        match failure {
            Some(status) => Err(ClientError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }

    fn find_node(&self, path_id: &str, node_id: &str) -> Result<Node> {
        lock(&self.state)
            .paths
            .get(path_id)
            .and_then(|path| path.nodes.iter().find(|node| node.node_id == node_id))
            .cloned()
            .ok_or(ClientError::Status {
                status: 404,
                body: String::new(),
            })
    }
}

impl PathApi for FakeBackend {
    async fn generate_path(&self, prompt: &str) -> Result<GeneratePathResponse> {
        self.enter(format!("generate:{prompt}"), "generate".to_string())
            .await?;
        let generated = {
            let mut state = lock(&self.state);
            let generated = state
                .generated
                .clone()
                .unwrap_or_else(|| path("generated", prompt, &["g1", "g2"]));
            state
                .paths
                .insert(generated.path_id.clone(), generated.clone());
            generated
        };
        Ok(GeneratePathResponse {
            path_id: generated.path_id,
            nodes: generated.nodes,
            message: Some("Path generated".to_string()),
        })
    }

    async fn get_path(&self, path_id: &str) -> Result<PathDetail> {
        let key = format!("path:{path_id}");
        self.enter(key.clone(), key).await?;
        lock(&self.state)
            .paths
            .get(path_id)
            .cloned()
            .ok_or(ClientError::Status {
                status: 404,
                body: String::new(),
            })
    }

    async fn get_node(&self, path_id: &str, node_id: &str) -> Result<Node> {
        let key = format!("node:{path_id}/{node_id}");
        self.enter(key.clone(), key).await?;
        self.find_node(path_id, node_id)
    }

    async fn update_node_completion(
        &self,
        path_id: &str,
        node_id: &str,
        completed: bool,
    ) -> Result<Node> {
        let key = format!("complete:{path_id}/{node_id}");
        self.enter(format!("{key}={completed}"), key).await?;

        let mut state = lock(&self.state);
        let node = state
            .paths
            .get_mut(path_id)
            .and_then(|path| path.nodes.iter_mut().find(|node| node.node_id == node_id))
            .ok_or(ClientError::Status {
                status: 404,
                body: String::new(),
            })?;
        node.completed = completed;
        Ok(node.clone())
    }
}
