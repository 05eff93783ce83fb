use std::sync::Arc;
use substation_core::RecordStore;

/// Shared handler state; cloning is cheap
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
