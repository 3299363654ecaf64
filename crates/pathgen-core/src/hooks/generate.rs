//! Path generation hook.

use log::{info, warn};

use super::{HookStatus, StatusCell, GENERATE_PATH_FALLBACK};
use crate::{
    api::PathApi, error::display_message, models::GeneratePathResponse, store::StoreHandle,
};

/// Requests a new path and makes it the store's current path.
#[derive(Debug)]
pub struct GeneratePath<A> {
    api: A,
    store: StoreHandle,
    status: StatusCell,
}

impl<A: PathApi> GeneratePath<A> {
    pub fn new(api: A, store: StoreHandle) -> Self {
        Self {
            api,
            store,
            status: StatusCell::default(),
        }
    }

    /// True while a generation request is in flight.
    pub fn is_generating(&self) -> bool {
        self.status.is_loading()
    }

    /// Message of the last failed generation, cleared by the next attempt.
    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn status(&self) -> HookStatus {
        self.status.get()
    }

    /// Generates a path from `prompt`.
    ///
    /// On success the store holds the new path and its nodes and the full
    /// response is returned. On failure the error is recorded and `None`
    /// is returned.
    pub async fn generate_path(&self, prompt: &str) -> Option<GeneratePathResponse> {
        let _in_flight = self.status.begin(Some(&self.store));

        match self.api.generate_path(prompt).await {
            Ok(response) => {
                info!(
                    "Generated path {} with {} nodes",
                    response.path_id,
                    response.nodes.len()
                );
                self.store
                    .set_current_path(response.path_id.clone(), response.nodes.clone());
                Some(response)
            }
            Err(e) => {
                warn!("Path generation failed: {e}");
                self.status
                    .set_error(display_message(&e, GENERATE_PATH_FALLBACK));
                None
            }
        }
    }
}
