//! Path fetch hook.

use log::{info, warn};

use super::{HookStatus, StatusCell, FETCH_PATH_FALLBACK};
use crate::{api::PathApi, error::display_message, models::PathDetail, store::StoreHandle};

/// Loads an existing path into the store.
#[derive(Debug)]
pub struct PathLoader<A> {
    api: A,
    store: StoreHandle,
    status: StatusCell,
}

impl<A: PathApi> PathLoader<A> {
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

    /// Fetches `path_id` and makes it the store's current path.
    pub async fn fetch_path(&self, path_id: &str) -> Option<PathDetail> {
        let _in_flight = self.status.begin(Some(&self.store));

        match self.api.get_path(path_id).await {
            Ok(path) => {
                info!("Loaded path {} with {} nodes", path.path_id, path.nodes.len());
                self.store
                    .set_current_path(path.path_id.clone(), path.nodes.clone());
                Some(path)
            }
            Err(e) => {
                warn!("Loading path {path_id} failed: {e}");
                self.status.set_error(display_message(&e, FETCH_PATH_FALLBACK));
                None
            }
        }
    }
}
