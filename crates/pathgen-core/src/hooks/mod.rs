//! Data hooks: one backend call, its loading/error state, and store writes.
//!
//! Every hook follows the same shape:
//!
//! ```text
//! begin  ──▶ loading = true, error = None
//! call   ──▶ PathApi operation (the only await point)
//! ok     ──▶ write the store / local state, return the value
//! err    ──▶ error = display_message(err, fallback), return None/false
//! finish ──▶ loading = false (always, even if the future is dropped)
//! ```
//!
//! Hooks take `&self`, so their flags can be read while a call is in
//! flight. Failures never leave a hook; callers decide whether to retry.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::store::StoreHandle;

pub mod generate;
pub mod node;
pub mod node_detail;
pub mod path;


pub use generate::GeneratePath;
pub use node::NodeOperations;
pub use node_detail::{NodeDetail, NodeDetailState};
pub use path::PathLoader;

/// Fallback shown when a generation failure has no message of its own.
pub const GENERATE_PATH_FALLBACK: &str = "Error generando el path";
/// Fallback shown when a path fetch failure has no message of its own.
pub const FETCH_PATH_FALLBACK: &str = "Error cargando el path";
/// Fallback shown when a node fetch failure has no message of its own.
pub const FETCH_NODE_FALLBACK: &str = "Error cargando el nodo";
/// Fallback shown when a completion update failure has no message of its own.
pub const UPDATE_NODE_FALLBACK: &str = "Error actualizando el nodo";
/// Fallback shown when a node detail failure has no message of its own.
pub const NODE_DETAIL_FALLBACK: &str = "Error cargando los detalles del nodo";

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loading and error flags owned by one hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct StatusCell(Mutex<HookStatus>);

impl StatusCell {
    pub(crate) fn get(&self) -> HookStatus {
        lock(&self.0).clone()
    }

    pub(crate) fn is_loading(&self) -> bool {
        lock(&self.0).is_loading
    }

    pub(crate) fn error(&self) -> Option<String> {
        lock(&self.0).error.clone()
    }

    pub(crate) fn set_error(&self, message: String) {
        lock(&self.0).error = Some(message);
    }

    /// Marks a call as started. The returned guard ends it on drop, which
    /// also clears the store's loading flag when one is given.
    pub(crate) fn begin<'a>(&'a self, store: Option<&'a StoreHandle>) -> InFlight<'a> {
        {
            let mut status = lock(&self.0);
            status.is_loading = true;
            status.error = None;
        }
        if let Some(store) = store {
            store.set_loading(true);
        }
        InFlight {
            status: self,
            store,
        }
    }
}

/// Clears the loading flags of a call when dropped.
pub(crate) struct InFlight<'a> {
    status: &'a StatusCell,
    store: Option<&'a StoreHandle>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(&self.status.0).is_loading = false;
        if let Some(store) = self.store {
            store.set_loading(false);
        }
    }
}
