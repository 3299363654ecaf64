//! Display formatting for paths, nodes and command outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI renders rich or plain. Collections and outcomes
//! get small wrapper types so empty cases and status prefixes are handled in
//! one place.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (PathDetail,    │───▶│ (Nodes,         │───▶│   Output        │
//! │  Node)          │    │  PathOverview)  │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: node list wrapper ([`Nodes`])
//! - [`datetime`]: local time formatting
//! - [`models`]: Display implementations for domain models and the
//!   [`PathOverview`] of the store's active path
//! - [`status`]: success/failure messages ([`OperationStatus`])
//!
//! # Examples
//!
//! ```rust
//! use pathgen_core::{display::Completion, models::Progress};
//!
//! let progress = Progress { total: 3, completed: 1 };
//! assert_eq!(progress.to_string(), "1/3 completados");
//! assert_eq!(Completion(true).to_string(), "✓ Completado");
//! assert_eq!(Completion(false).to_string(), "En progreso");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::Nodes;
pub use datetime::LocalDateTime;
pub use models::{Completion, PathOverview};
pub use status::OperationStatus;
