use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::FeedbackStore;

pub type SharedStore = Arc<RwLock<FeedbackStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(FeedbackStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
