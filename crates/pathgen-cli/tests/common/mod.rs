//! Local HTTP backend the `pathgen` binary is pointed at.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, task::JoinHandle};

pub const BOILERPLATE: &str =
    "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"¡Hola!\")\n}";

type Paths = Arc<Mutex<HashMap<String, Value>>>;

fn node(node_id: &str, order: i64) -> Value {
    json!({
        "node_id": node_id,
        "path_id": "p1",
        "title": format!("Exercise {order}"),
        "description": "Print a greeting",
        "content": "",
        "markdown_content": format!("# Exercise {order}\n\n| a | b |\n|---|---|\n| 1 | 2 |\n"),
        "boilerplate": BOILERPLATE,
        "order": order,
        "completed": false
    })
}

fn learn_go() -> Value {
    json!({
        "path_id": "p1",
        "prompt": "learn Go",
        "nodes": [node("n1", 1), node("n2", 2)],
        "created_at": "2024-05-01T10:30:00Z"
    })
}

pub struct StubBackend {
    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl StubBackend {
    pub async fn start() -> Self {
        let paths = Paths::default();
        paths.lock().unwrap().insert("p1".to_string(), learn_go());

        let api = Router::new()
            .route("/generate-path", post(generate_path))
            .route("/paths/:path_id", get(get_path))
            .route(
                "/paths/:path_id/nodes/:node_id",
                get(get_node).patch(update_node),
            )
            .with_state(paths);
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, server }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "not found" }))).into_response()
}

async fn generate_path(Json(request): Json<Value>) -> Response {
    if request["prompt"] == "fail" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    let path = learn_go();
    Json(json!({
        "path_id": path["path_id"],
        "nodes": path["nodes"],
        "message": "Path generated successfully"
    }))
    .into_response()
}

async fn get_path(State(paths): State<Paths>, Path(path_id): Path<String>) -> Response {
    match paths.lock().unwrap().get(&path_id) {
        Some(path) => Json(path.clone()).into_response(),
        None => not_found(),
    }
}

fn find_node<'a>(
    paths: &'a mut HashMap<String, Value>,
    path_id: &str,
    node_id: &str,
) -> Option<&'a mut Value> {
    paths
        .get_mut(path_id)?
        .get_mut("nodes")?
        .as_array_mut()?
        .iter_mut()
        .find(|node| node["node_id"] == node_id)
}

async fn get_node(
    State(paths): State<Paths>,
    Path((path_id, node_id)): Path<(String, String)>,
) -> Response {
    let mut paths = paths.lock().unwrap();
    match find_node(&mut paths, &path_id, &node_id) {
        Some(node) => Json(node.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_node(
    State(paths): State<Paths>,
    Path((path_id, node_id)): Path<(String, String)>,
    Json(request): Json<Value>,
) -> Response {
    let mut paths = paths.lock().unwrap();
    match find_node(&mut paths, &path_id, &node_id) {
        Some(node) => {
            node["completed"] = request["completed"].clone();
            Json(node.clone()).into_response()
        }
        None => not_found(),
    }
}
