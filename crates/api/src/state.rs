use std::sync::Arc;

use drawer_core::card_store::DrawerCardStore;
use drawer_core::image_intake::ImageIntake;
use drawer_core::status_log::StatusLog;
use drawer_core::store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Backing store, shared by the services below.
    pub store: Arc<dyn DocumentStore>,
    pub cards: DrawerCardStore,
    pub status_log: StatusLog,
    pub intake: Arc<ImageIntake>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: &ServerConfig) -> Self {
        Self {
            cards: DrawerCardStore::new(Arc::clone(&store)),
            status_log: StatusLog::new(Arc::clone(&store)),
            intake: Arc::new(ImageIntake::new(
                config.upload_dir.clone(),
                config.max_upload_bytes,
            )),
            store,
        }
    }
}
