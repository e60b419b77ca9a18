//! Shared application state.

use oneiro_core::OneiroConfig;
use oneiro_store::JsonHistoryStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: OneiroConfig,
    pub store: JsonHistoryStore,
}

impl AppState {
    pub fn new(config: OneiroConfig, store: JsonHistoryStore) -> Self {
        Self { config, store }
    }
}
