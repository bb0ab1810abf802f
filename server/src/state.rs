//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the immutable sample catalog every view is derived from, the
//! in-memory session table, and the parsed server configuration.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use views::Catalog;

use crate::config::ServerConfig;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
