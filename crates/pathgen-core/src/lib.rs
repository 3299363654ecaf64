//! Core library for the learning path generator client.
//!
//! This crate talks to the path generation backend and holds everything a
//! front-end needs around it: the data model, an HTTP client, the session
//! store, data hooks with loading and error state, and views that render as
//! markdown.
//!
//! # Layers
//!
//! ```text
//! views  ──▶ hooks ──▶ api (PathApi) ──▶ backend
//!              │
//!              ▼
//!            store
//! ```
//!
//! - **Models** ([`models`]): wire types shared with the backend
//! - **API** ([`api`]): the [`PathApi`] trait and its HTTP implementation
//! - **Store** ([`store`]): the active path, its nodes and the selected node
//! - **Hooks** ([`hooks`]): one backend operation each, with flags
//! - **Views** ([`views`]) and **Display** ([`display`]): markdown output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pathgen_core::{hooks::GeneratePath, ApiClientBuilder, StoreHandle};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClientBuilder::new()
//!     .with_base_url(Some("http://localhost:8000/api"))
//!     .build()?;
//! let store = StoreHandle::new();
//!
//! let generate = GeneratePath::new(client, store.clone());
//! if generate.generate_path("learn Go").await.is_some() {
//!     println!("{:?}", store.current_path_id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod hooks;
pub mod models;
pub mod store;
pub mod views;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::{ApiClient, ApiClientBuilder, PathApi};
pub use config::ApiConfig;
pub use display::{Completion, LocalDateTime, Nodes, OperationStatus, PathOverview};
pub use error::{ClientError, Result};
pub use models::{GeneratePathResponse, Node, NodePatch, PathDetail, Progress};
pub use store::{PathStore, StoreHandle};
