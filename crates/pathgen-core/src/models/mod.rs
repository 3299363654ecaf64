//! Data models for paths and nodes.
//!
//! These types mirror the backend's JSON contract field for field. Display
//! implementations live in [`crate::display`] so presentation stays apart
//! from the wire shapes.
//!
//! # Examples
//!
//! ```rust
//! use pathgen_core::models::{Node, NodePatch};
//!
//! let mut node: Node = serde_json::from_str(
//!     r#"{"node_id":"n1","path_id":"p1","title":"Intro","order":1}"#,
//! )?;
//! assert!(!node.completed);
//! assert_eq!(node.description, "");
//!
//! NodePatch::completed(true).apply_to(&mut node);
//! assert!(node.completed);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod node;
pub mod patch;
pub mod path;
pub mod progress;
pub mod requests;


pub use node::Node;
pub use patch::NodePatch;
pub use path::{GeneratePathResponse, PathDetail};
pub use progress::Progress;
pub use requests::{GeneratePathRequest, NodeCompletionRequest};
