//! Stub backend served over real HTTP for client tests.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use jiff::Timestamp;
use pathgen_core::{
    models::{GeneratePathRequest, GeneratePathResponse, Node, NodeCompletionRequest, PathDetail},
    ApiClient, ApiClientBuilder,
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Prompt that makes the stub answer with a 500.
pub const FAILING_PROMPT: &str = "fail";
/// Prompt that makes the stub wait before answering.
pub const SLOW_PROMPT: &str = "slow";
/// Path id whose body is not valid JSON.
pub const BROKEN_PATH: &str = "broken";

#[derive(Debug, Default)]
struct StubState {
    paths: HashMap<String, PathDetail>,
    requests: Vec<String>,
    content_types: Vec<String>,
}

type Shared = Arc<Mutex<StubState>>;

pub fn sample_node(path_id: &str, node_id: &str, order: i64) -> Node {
    Node {
        node_id: node_id.to_string(),
        path_id: path_id.to_string(),
        title: format!("Exercise {order}"),
        description: "Write a program".to_string(),
        content: String::new(),
        markdown_content: Some(format!("# Exercise {order}\n\nPrint `hello`.")),
        boilerplate: Some("package main\n\nfunc main() {\n\t// TODO\n}\n".to_string()),
        order,
        completed: false,
    }
}

pub fn sample_path(path_id: &str, prompt: &str) -> PathDetail {
    PathDetail {
        path_id: path_id.to_string(),
        prompt: prompt.to_string(),
        nodes: vec![sample_node(path_id, "n1", 1), sample_node(path_id, "n2", 2)],
        created_at: Timestamp::from_second(1_714_559_400).unwrap(),
    }
}

/// Backend double listening on an ephemeral local port.
///
/// Routes live under `/api`, like the real deployment.
pub struct StubBackend {
    addr: SocketAddr,
    state: Shared,
    server: JoinHandle<()>,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = Shared::default();
        state
            .lock()
            .unwrap()
            .paths
            .insert("p1".to_string(), sample_path("p1", "learn Go"));

        let api = Router::new()
            .route("/generate-path", post(generate_path))
            .route("/paths/:path_id", get(get_path))
            .route(
                "/paths/:path_id/nodes/:node_id",
                get(get_node).patch(update_node),
            )
            .with_state(Arc::clone(&state));
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClientBuilder::new()
            .with_base_url(Some(self.base_url()))
            .build()
            .expect("Failed to build client")
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> ApiClient {
        ApiClientBuilder::new()
            .with_base_url(Some(self.base_url()))
            .with_timeout(Some(timeout))
            .build()
            .expect("Failed to build client")
    }

    /// Requests received so far, as `METHOD /path`.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// `Content-Type` of every request that carried a body.
    pub fn content_types(&self) -> Vec<String> {
        self.state.lock().unwrap().content_types.clone()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn record(state: &Shared, request: String, headers: Option<&HeaderMap>) {
    let mut state = state.lock().unwrap();
    state.requests.push(request);
    if let Some(headers) = headers {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        state.content_types.push(content_type);
    }
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": format!("{what} not found") })),
    )
        .into_response()
}

async fn generate_path(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(request): Json<GeneratePathRequest>,
) -> Response {
    record(&state, "POST /api/generate-path".to_string(), Some(&headers));

    match request.prompt.as_str() {
        FAILING_PROMPT => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "generation backend down").into_response()
        }
        SLOW_PROMPT => tokio::time::sleep(Duration::from_secs(2)).await,
        _ => {}
    }

    let path = sample_path("generated", &request.prompt);
    state
        .lock()
        .unwrap()
        .paths
        .insert(path.path_id.clone(), path.clone());
    Json(GeneratePathResponse {
        path_id: path.path_id,
        nodes: path.nodes,
        message: Some("Path generated successfully".to_string()),
    })
    .into_response()
}

async fn get_path(State(state): State<Shared>, Path(path_id): Path<String>) -> Response {
    record(&state, format!("GET /api/paths/{path_id}"), None);

    if path_id == BROKEN_PATH {
        return (
            [(header::CONTENT_TYPE, "application/json")],
            "{\"path_id\": ",
        )
            .into_response();
    }
    let path = state.lock().unwrap().paths.get(&path_id).cloned();
    match path {
        Some(path) => Json(path).into_response(),
        None => not_found("Path"),
    }
}

async fn get_node(
    State(state): State<Shared>,
    Path((path_id, node_id)): Path<(String, String)>,
) -> Response {
    record(&state, format!("GET /api/paths/{path_id}/nodes/{node_id}"), None);

    let node = state
        .lock()
        .unwrap()
        .paths
        .get(&path_id)
        .and_then(|path| path.nodes.iter().find(|node| node.node_id == node_id))
        .cloned();
    match node {
        Some(node) => Json(node).into_response(),
        None => not_found("Node"),
    }
}

async fn update_node(
    State(state): State<Shared>,
    Path((path_id, node_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(request): Json<NodeCompletionRequest>,
) -> Response {
    record(
        &state,
        format!("PATCH /api/paths/{path_id}/nodes/{node_id}"),
        Some(&headers),
    );

    let mut state = state.lock().unwrap();
    let node = state
        .paths
        .get_mut(&path_id)
        .and_then(|path| path.nodes.iter_mut().find(|node| node.node_id == node_id));
    match node {
        Some(node) => {
            node.completed = request.completed;
            Json(node.clone()).into_response()
        }
        None => not_found("Node"),
    }
}
